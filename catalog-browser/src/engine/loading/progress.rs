use bevy::prelude::*;

/// Startup milestones plus cover fetch counters, reported to the loading
/// text and the host page.
#[derive(Resource, Default, Debug)]
pub struct LoadingProgress {
    pub dataset_loaded: bool,
    pub scene_built: bool,
    pub items_spawned: usize,
    pub covers_requested: usize,
    pub covers_loaded: usize,
    pub covers_failed: usize,
    pub failure: Option<String>,
}

impl LoadingProgress {
    pub fn covers_pending(&self) -> usize {
        self.covers_requested
            .saturating_sub(self.covers_loaded + self.covers_failed)
    }

    pub fn status_line(&self) -> String {
        if let Some(failure) = &self.failure {
            return failure.clone();
        }
        if !self.dataset_loaded {
            return "Loading catalog...".to_string();
        }
        if !self.scene_built {
            return "Building scene...".to_string();
        }
        format!(
            "{} items, {} covers loading",
            self.items_spawned,
            self.covers_pending()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_covers_never_underflow() {
        let progress = LoadingProgress {
            covers_requested: 3,
            covers_loaded: 2,
            covers_failed: 2,
            ..default()
        };
        assert_eq!(progress.covers_pending(), 0);
    }

    #[test]
    fn failure_overrides_status() {
        let progress = LoadingProgress {
            dataset_loaded: true,
            failure: Some("Failed to load catalog".into()),
            ..default()
        };
        assert_eq!(progress.status_line(), "Failed to load catalog");
    }
}
