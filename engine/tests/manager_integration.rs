use async_trait::async_trait;
use claims::*;
use engine::ColorSpaceError;
use engine::color_manager::{COLOR_CUSTOMIZATION_KEYS, ColorManager};
use engine::host::{
    COLOR_CUSTOMIZATIONS_SECTION, COLORSPACE_SECTION, ColorSpaceContext, ConfigurationTarget,
    FixedWorkspace, InMemorySettings, InputBoxOptions, Notifier, Prompter, QuickPickItem,
    SettingsMap, SharedWorkspace,
};
use engine::model::ColorScheme;
use engine::palette::{FIXED_PALETTE, is_palette_color};
use engine::storage::RecordingStorageListener;
use serde_json::{Value, json};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

// Helper module for manager testing
mod helpers {
    use super::*;

    #[derive(Default)]
    pub struct RecordingNotifier {
        pub infos: Mutex<Vec<String>>,
        pub errors: Mutex<Vec<String>>,
    }

    impl RecordingNotifier {
        pub fn infos(&self) -> Vec<String> {
            self.infos.lock().unwrap().clone()
        }

        pub fn errors(&self) -> Vec<String> {
            self.errors.lock().unwrap().clone()
        }
    }

    impl Notifier for RecordingNotifier {
        fn info(&self, message: &str) {
            self.infos.lock().unwrap().push(message.to_string());
        }

        fn error(&self, message: &str) {
            self.errors.lock().unwrap().push(message.to_string());
        }
    }

    /// Answers prompts from a script; `None` entries dismiss the prompt.
    #[derive(Default)]
    pub struct ScriptedPrompter {
        pub picks: Mutex<VecDeque<Option<usize>>>,
        pub inputs: Mutex<VecDeque<Option<String>>>,
        pub seen_items: Mutex<Vec<QuickPickItem>>,
    }

    impl ScriptedPrompter {
        pub fn picking(index: Option<usize>) -> Self {
            let prompter = Self::default();
            prompter.picks.lock().unwrap().push_back(index);
            prompter
        }
    }

    #[async_trait]
    impl Prompter for ScriptedPrompter {
        async fn show_quick_pick(
            &self,
            items: &[QuickPickItem],
            _placeholder: &str,
        ) -> Option<usize> {
            *self.seen_items.lock().unwrap() = items.to_vec();
            self.picks.lock().unwrap().pop_front().flatten()
        }

        async fn show_input_box(&self, _options: &InputBoxOptions) -> Option<String> {
            self.inputs.lock().unwrap().pop_front().flatten()
        }
    }

    pub struct Harness {
        pub dir: TempDir,
        pub settings: Arc<InMemorySettings>,
        pub notifier: Arc<RecordingNotifier>,
        pub listener: Arc<RecordingStorageListener>,
        pub manager: ColorManager,
    }

    pub fn harness() -> Harness {
        harness_with_settings(InMemorySettings::new())
    }

    pub fn harness_with_settings(settings: InMemorySettings) -> Harness {
        let dir = TempDir::new().unwrap();
        let settings = Arc::new(settings);
        let notifier = Arc::new(RecordingNotifier::default());
        let listener = Arc::new(RecordingStorageListener::new());
        let context = ColorSpaceContext::new(
            Arc::new(FixedWorkspace::new(dir.path())),
            settings.clone(),
        )
        .with_notifier(notifier.clone())
        .with_storage_listener(listener.clone());

        Harness {
            dir,
            settings,
            notifier,
            listener,
            manager: ColorManager::new(context),
        }
    }

    pub fn options(value: Value) -> SettingsMap {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    pub fn foreign_customizations() -> SettingsMap {
        options(json!({ "foo.bar": "baz" }))
    }

    pub fn scheme(name: &str) -> ColorScheme {
        ColorScheme::from_backgrounds(name, "#101010", "#202020")
    }

    pub fn customizations(h: &Harness) -> SettingsMap {
        h.settings.section(COLOR_CUSTOMIZATIONS_SECTION)
    }
}

use helpers::*;

mod apply_and_reset {
    use super::*;

    #[tokio::test]
    async fn test_apply_preserves_unrelated_keys() {
        let h = harness_with_settings(
            InMemorySettings::new()
                .with_section(COLOR_CUSTOMIZATIONS_SECTION, foreign_customizations()),
        );

        for scheme in FIXED_PALETTE.iter() {
            assert_ok!(h.manager.apply_color(scheme).await);
            assert_eq!(customizations(&h)["foo.bar"], json!("baz"));
        }
    }

    #[tokio::test]
    async fn test_apply_writes_at_workspace_scope() {
        let h = harness();
        assert_ok!(h.manager.apply_color(&FIXED_PALETTE[0]).await);

        assert_eq!(
            h.settings.updates(),
            vec![(
                COLOR_CUSTOMIZATIONS_SECTION.to_string(),
                ConfigurationTarget::Workspace
            )]
        );
    }

    #[tokio::test]
    async fn test_region_gating_from_options() {
        let settings = InMemorySettings::new().with_section(
            COLORSPACE_SECTION,
            options(json!({
                "colorElements": { "activityBar": false, "sideBar": true, "statusBar": true }
            })),
        );
        let h = harness_with_settings(settings);
        let mut no_status = scheme("No status");
        no_status.status_bar = None;

        assert_ok!(h.manager.apply_color(&no_status).await);

        let written = customizations(&h);
        assert_eq!(written.len(), 3);
        assert!(written.contains_key("sideBar.background"));
        assert!(written.contains_key("sideBar.foreground"));
        assert!(written.contains_key("sideBarTitle.foreground"));
    }

    #[tokio::test]
    async fn test_status_bar_written_only_when_enabled() {
        let settings = InMemorySettings::new().with_section(
            COLORSPACE_SECTION,
            options(json!({ "colorElements": { "statusBar": true } })),
        );
        let h = harness_with_settings(settings);

        assert_ok!(h.manager.apply_color(&FIXED_PALETTE[5]).await);

        let written = customizations(&h);
        assert_eq!(written.len(), 9);
        assert_eq!(
            written["statusBar.noFolderBackground"],
            json!(FIXED_PALETTE[5].activity_bar.background)
        );
    }

    #[tokio::test]
    async fn test_reset_removes_exactly_the_known_keys() {
        let settings = InMemorySettings::new()
            .with_section(COLOR_CUSTOMIZATIONS_SECTION, foreign_customizations())
            .with_section(
                COLORSPACE_SECTION,
                options(json!({ "colorElements": { "statusBar": true } })),
            );
        let h = harness_with_settings(settings);

        assert_ok!(h.manager.set_workspace_color(&FIXED_PALETTE[2]).await);
        assert_ok!(h.manager.reset_color().await);

        let remaining = customizations(&h);
        for key in COLOR_CUSTOMIZATION_KEYS {
            assert!(!remaining.contains_key(key), "{key} should be removed");
        }
        assert_eq!(remaining, foreign_customizations());
        assert!(!h.manager.storage().has_config().await);
    }

    #[tokio::test]
    async fn test_reset_twice_matches_reset_once() {
        let settings = InMemorySettings::new()
            .with_section(COLOR_CUSTOMIZATIONS_SECTION, foreign_customizations());
        let h = harness_with_settings(settings);
        assert_ok!(h.manager.set_workspace_color(&FIXED_PALETTE[0]).await);

        assert_ok!(h.manager.reset_color().await);
        let after_once = customizations(&h);
        let config_once = h.manager.storage().read_config().await;

        assert_ok!(h.manager.reset_color().await);
        assert_eq!(customizations(&h), after_once);
        assert_eq!(h.manager.storage().read_config().await, config_once);
        assert!(h.notifier.errors().is_empty());
    }
}

mod selection {
    use super::*;

    #[tokio::test]
    async fn test_set_workspace_color_persists_applies_and_confirms() {
        let h = harness();

        assert_ok!(h.manager.set_workspace_color(&FIXED_PALETTE[7]).await);

        assert_eq!(
            h.manager.get_workspace_color().await,
            Some(FIXED_PALETTE[7].clone())
        );
        assert_eq!(
            customizations(&h)["activityBar.background"],
            json!("#1e3a8a")
        );
        assert_eq!(h.notifier.infos(), vec!["Workspace color set to: Indigo Blue"]);
    }

    #[tokio::test]
    async fn test_auto_assign_picks_a_palette_entry_and_persists_it() {
        let h = harness();

        assert_ok!(h.manager.auto_assign_color().await);

        let assigned = h.manager.get_workspace_color().await.unwrap();
        assert!(is_palette_color(&assigned));
        assert!(
            h.dir
                .path()
                .join(".vscode")
                .join("colorspace.json")
                .exists()
        );
    }

    #[tokio::test]
    async fn test_auto_assign_reapplies_existing_color() {
        let h = harness();
        let mine = scheme("Mine");
        assert_ok!(h.manager.storage().set_current_color(&mine).await);

        assert_ok!(h.manager.auto_assign_color().await);

        assert_eq!(h.manager.get_workspace_color().await, Some(mine));
        assert_eq!(
            customizations(&h)["activityBar.background"],
            json!("#101010")
        );
        // Re-applying is silent.
        assert!(h.notifier.infos().is_empty());
    }

    #[tokio::test]
    async fn test_auto_assign_disabled_is_a_no_op() {
        let settings = InMemorySettings::new()
            .with_section(COLORSPACE_SECTION, options(json!({ "autoColor": false })));
        let h = harness_with_settings(settings);

        assert_ok!(h.manager.auto_assign_color().await);

        assert!(h.manager.get_workspace_color().await.is_none());
        assert!(h.settings.updates().is_empty());
    }

    #[tokio::test]
    async fn test_auto_assign_disabled_survives_malformed_elements() {
        let settings = InMemorySettings::new().with_section(
            COLORSPACE_SECTION,
            options(json!({ "autoColor": false, "colorElements": true })),
        );
        let h = harness_with_settings(settings);

        assert_ok!(h.manager.auto_assign_color().await);

        assert!(h.manager.get_workspace_color().await.is_none());
        assert!(customizations(&h).is_empty());
        assert!(h.settings.updates().is_empty());
    }

    #[tokio::test]
    async fn test_pick_random_color_uses_palette() {
        let h = harness();
        assert_ok!(h.manager.pick_random_color().await);
        assert!(is_palette_color(
            &h.manager.get_workspace_color().await.unwrap()
        ));
    }

    #[tokio::test]
    async fn test_picker_lists_fixed_then_custom() {
        let h = harness();
        assert_ok!(h.manager.add_custom_color(&scheme("Mine")).await);
        let prompter = ScriptedPrompter::picking(Some(12));

        assert_ok!(h.manager.show_color_picker(&prompter).await);

        let items = prompter.seen_items.lock().unwrap().clone();
        assert_eq!(items.len(), 13);
        assert_eq!(items[0].description, "Fixed");
        assert_eq!(items[12].label, "Mine");
        assert_eq!(items[12].description, "Custom");
        assert_eq!(items[12].detail, "#101010");
        assert_eq!(h.manager.get_workspace_color().await, Some(scheme("Mine")));
    }

    #[tokio::test]
    async fn test_dismissed_picker_changes_nothing() {
        let h = harness();
        let prompter = ScriptedPrompter::picking(None);

        assert_ok!(h.manager.show_color_picker(&prompter).await);

        assert!(h.manager.get_workspace_color().await.is_none());
        assert!(h.settings.updates().is_empty());
    }
}

mod custom_colors {
    use super::*;

    #[tokio::test]
    async fn test_update_out_of_range_propagates() {
        let h = harness();
        assert_ok!(h.manager.add_custom_color(&scheme("A")).await);
        assert_ok!(h.manager.add_custom_color(&scheme("B")).await);

        let result = h.manager.update_custom_color(5, &scheme("X")).await;

        assert_matches!(result, Err(ColorSpaceError::InvalidIndex { index: 5, len: 2 }));
        assert_eq!(h.manager.get_all_colors().await.custom.len(), 2);
    }

    #[tokio::test]
    async fn test_delete_renumbers_and_confirms() {
        let h = harness();
        for name in ["A", "B", "C"] {
            assert_ok!(h.manager.add_custom_color(&scheme(name)).await);
        }

        assert_ok!(h.manager.delete_custom_color(0).await);
        assert_eq!(
            h.manager.get_all_colors().await.custom,
            vec![scheme("B"), scheme("C")]
        );

        assert_ok!(h.manager.delete_custom_color(1).await);
        assert_eq!(h.manager.get_all_colors().await.custom, vec![scheme("B")]);
        assert!(
            h.notifier
                .infos()
                .contains(&"Custom color \"C\" deleted".to_string())
        );
    }

    #[tokio::test]
    async fn test_delete_out_of_range_is_silent() {
        let h = harness();
        assert_ok!(h.manager.add_custom_color(&scheme("A")).await);
        let infos_before = h.notifier.infos().len();

        assert_ok!(h.manager.delete_custom_color(3).await);

        assert_eq!(h.manager.get_all_colors().await.custom.len(), 1);
        assert_eq!(h.notifier.infos().len(), infos_before);
    }

    #[tokio::test]
    async fn test_all_colors_contains_full_palette() {
        let h = harness();
        let colors = h.manager.get_all_colors().await;
        assert_eq!(colors.fixed.len(), 12);
        assert!(colors.custom.is_empty());
    }
}

mod workspace_binding {
    use super::*;

    fn unbound_manager(
        notifier: Arc<RecordingNotifier>,
        settings: Arc<InMemorySettings>,
    ) -> ColorManager {
        let context = ColorSpaceContext::new(Arc::new(FixedWorkspace::none()), settings)
            .with_notifier(notifier);
        ColorManager::new(context)
    }

    #[tokio::test]
    async fn test_no_workspace_is_reported_and_stops() {
        let notifier = Arc::new(RecordingNotifier::default());
        let settings = Arc::new(InMemorySettings::new());
        let manager = unbound_manager(notifier.clone(), settings.clone());

        assert_ok!(manager.set_workspace_color(&FIXED_PALETTE[0]).await);
        assert_ok!(manager.reset_color().await);

        assert_eq!(
            notifier.errors(),
            vec!["No workspace folder is open", "No workspace folder is open"]
        );
        assert!(settings.updates().is_empty());
    }

    #[tokio::test]
    async fn test_custom_color_without_workspace_fails() {
        let manager = unbound_manager(
            Arc::new(RecordingNotifier::default()),
            Arc::new(InMemorySettings::new()),
        );
        assert_matches!(
            manager.add_custom_color(&scheme("A")).await,
            Err(ColorSpaceError::NoWorkspace)
        );
    }

    #[tokio::test]
    async fn test_store_follows_workspace_changes() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        let workspace = SharedWorkspace::new(Some(first.path().to_path_buf()));
        let manager = ColorManager::new(ColorSpaceContext::new(
            Arc::new(workspace.clone()),
            Arc::new(InMemorySettings::new()),
        ));

        assert_ok!(manager.set_workspace_color(&FIXED_PALETTE[0]).await);
        workspace.set_root(Some(second.path()));
        assert!(manager.get_workspace_color().await.is_none());

        assert_ok!(manager.set_workspace_color(&FIXED_PALETTE[1]).await);
        workspace.set_root(Some(first.path()));
        assert_eq!(
            manager.get_workspace_color().await,
            Some(FIXED_PALETTE[0].clone())
        );
    }
}

mod corrupt_documents {
    use super::*;

    #[tokio::test]
    async fn test_corrupt_document_is_observable_but_harmless() {
        let h = harness();
        let dir = h.dir.path().join(".vscode");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("colorspace.json"), "[1, 2").unwrap();

        assert!(h.manager.get_workspace_color().await.is_none());
        assert_eq!(h.listener.corruption_count(), 1);

        // The next write replaces the corrupt document.
        assert_ok!(h.manager.add_custom_color(&scheme("A")).await);
        assert_eq!(h.manager.get_all_colors().await.custom, vec![scheme("A")]);
    }
}
