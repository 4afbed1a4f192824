/// Config Testing
#[cfg(test)]
mod config {
    use crate::{
        config::{self, Config},
        errors::CliError,
    };
    use std::{convert::TryFrom, io::Write};
    use tilekeys_core::config::{
        Config as _, Modifier, Modifiers,
        command::{self, Command as _, Spawn, ToGroup, ToScreen},
        layout::LayoutSpec,
        options::Options,
    };
    use tilekeys_core::errors::TileError;

    const DEMO: &str = include_str!("../../demos/config.ron");

    fn parse(contents: &str) -> Config {
        Config::try_from(contents.to_owned()).expect("Failed to parse config.")
    }

    fn mods(modifiers: &[Modifier]) -> Modifiers {
        modifiers.iter().copied().collect()
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config = parse("()");
        assert_eq!(config, Config::default());

        let snapshot = config.compile().expect("Failed to compile config.");
        assert!(snapshot.keys.is_empty());
        assert!(snapshot.groups.is_empty());
        assert_eq!(snapshot.layouts, vec![LayoutSpec::default()]);
        assert_eq!(snapshot.options, Options::default());
    }

    #[test]
    fn mod_placeholder_expands_to_configured_modifier() {
        let config = parse(
            r#"(
                modifier: ["alt"],
                keybinds: [
                    (command: Layout(Left), modifier: ["mod", "shift"], key: Key("h")),
                ],
            )"#,
        );
        let bindings = config.mapped_bindings().unwrap();

        assert_eq!(bindings.len(), 1);
        assert_eq!(bindings[0].modifier, mods(&[Modifier::Shift, Modifier::Mod1]));
        assert_eq!(bindings[0].key, "h");
        let command = command::denormalize(&bindings[0].command).unwrap();
        assert_eq!(command.describe(), "layout.left()");
    }

    #[test]
    fn spawns_fan_out_one_binding_per_key() {
        let config = parse(
            r#"(
                keybinds: [(
                    command: Spawns(["brightnessctl set +10%", "brightnessctl set 10%-"]),
                    key: Keys(["XF86MonBrightnessUp", "XF86MonBrightnessDown"]),
                    desc: Some("Change Brightness"),
                )],
            )"#,
        );
        let bindings = config.mapped_bindings().unwrap();

        assert_eq!(bindings.len(), 2);
        assert_eq!(bindings[0].key, "XF86MonBrightnessUp");
        assert_eq!(
            bindings[0].command,
            Spawn::new("brightnessctl set +10%").normalize().unwrap()
        );
        assert_eq!(bindings[1].key, "XF86MonBrightnessDown");
        assert_eq!(
            bindings[1].command,
            Spawn::new("brightnessctl set 10%-").normalize().unwrap()
        );
        assert!(bindings.iter().all(|kb| kb.modifier.is_empty()));
        assert!(bindings.iter().all(|kb| kb.desc.as_deref() == Some("Change Brightness")));
    }

    #[test]
    fn key_shape_must_fit_the_command() {
        let mismatched = parse(
            r#"(keybinds: [(command: Spawns(["a", "b"]), key: Keys(["x"]))])"#,
        );
        assert!(matches!(
            mismatched.mapped_bindings(),
            Err(TileError::NumberOfKeysDiffersFromValues)
        ));

        let single = parse(r#"(keybinds: [(command: Spawns(["a"]), key: Key("x"))])"#);
        assert!(matches!(
            single.mapped_bindings(),
            Err(TileError::MultipleKeysNeeded)
        ));

        let multiple = parse(r#"(keybinds: [(command: Shutdown, key: Keys(["x", "y"]))])"#);
        assert!(matches!(
            multiple.mapped_bindings(),
            Err(TileError::SingleKeyNeeded)
        ));

        let empty = parse(r#"(keybinds: [(command: Spawn(" "), key: Key("x"))])"#);
        assert!(matches!(empty.mapped_bindings(), Err(TileError::ValueNotFound)));
    }

    #[test]
    fn unknown_modifier_is_rejected() {
        let config = parse(
            r#"(keybinds: [(command: Shutdown, modifier: ["hyper"], key: Key("q"))])"#,
        );
        assert!(matches!(
            config.compile(),
            Err(CliError::Config(TileError::UnknownModifier(name))) if name == "hyper"
        ));
    }

    #[test]
    fn commands_must_name_existing_groups() {
        let config = parse(
            r#"(
                groups: ["web"],
                keybinds: [(command: ToScreen("mail"), modifier: ["mod"], key: Key("m"))],
            )"#,
        );
        assert!(matches!(
            config.compile(),
            Err(CliError::Config(TileError::UnknownGroup(name))) if name == "mail"
        ));

        let config = parse(
            r#"(
                groups: ["web"],
                keybinds: [(command: ToScreen("web"), modifier: ["mod"], key: Key("w"))],
            )"#,
        );
        assert!(config.compile().is_ok());
    }

    #[test]
    fn bad_colour_fails_to_parse() {
        let result = Config::try_from(r##"(widget_defaults: (foreground: "#12345"))"##.to_owned());
        assert!(matches!(result, Err(CliError::RonError(_))));
    }

    #[test]
    fn at_most_nine_groups() {
        let names: Vec<String> = (1..=10).map(|i| format!("\"g{i}\"")).collect();
        let config = parse(&format!("(groups: [{}])", names.join(", ")));
        assert!(matches!(
            config.compile(),
            Err(CliError::Config(TileError::TooManyGroups { count: 10, max: 9 }))
        ));
    }

    #[test]
    fn group_bindings_follow_explicit_ones() {
        let config = parse(
            r#"(
                modifier: ["mod4"],
                groups: ["web", "mail"],
                move_switches_group: false,
                keybinds: [(command: Spawn("alacritty"), modifier: ["mod"], key: Key("Return"))],
            )"#,
        );
        let table = config.binding_table().unwrap();

        assert_eq!(table.explicit().len(), 1);
        assert_eq!(table.derived().len(), 4);
        let to_group = &table.derived()[3];
        assert_eq!(to_group.key, "2");
        assert_eq!(to_group.modifier, mods(&[Modifier::Shift, Modifier::Mod4]));
        assert_eq!(to_group.command, ToGroup::new("mail", false).normalize().unwrap());
        assert_eq!(
            table.derived()[0].command,
            ToScreen::new("web").normalize().unwrap()
        );
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"(groups: ["web", "mail"])"#).unwrap();

        let config = config::load(Some(file.path())).unwrap();
        let snapshot = config.compile().unwrap();
        assert_eq!(snapshot.groups.len(), 2);
        assert_eq!(snapshot.keys.len(), 4);
    }

    #[test]
    fn missing_config_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(config::CONFIG_FILE_NAME);
        assert!(matches!(
            config::load_from(&path),
            Err(CliError::NoConfigFound(missing)) if missing == path
        ));
    }

    #[test]
    fn demo_config_compiles() {
        let snapshot = parse(DEMO).compile().expect("Failed to compile demo config.");

        assert_eq!(snapshot.groups.len(), 6);
        assert_eq!(snapshot.layouts.len(), 2);
        assert_eq!(snapshot.mouse.len(), 3);
        assert_eq!(snapshot.screens.len(), 1);

        let table = snapshot.binding_table();
        assert_eq!(table.explicit().len(), 38);
        assert_eq!(table.derived().len(), 12);
        assert!(table.conflicts().is_empty());

        let terminal = table
            .lookup(&mods(&[Modifier::Mod4]), "Return")
            .expect("Terminal binding missing.");
        assert_eq!(terminal.command, Spawn::new("alacritty").normalize().unwrap());
    }

    #[test]
    fn demo_snapshot_survives_a_dump() {
        let snapshot = parse(DEMO).compile().unwrap();
        let dumped = snapshot.to_ron().unwrap();
        let restored = tilekeys_core::config::Snapshot::from_ron(&dumped).unwrap();
        assert_eq!(restored, snapshot);
    }
}

/// Report Testing
#[cfg(test)]
mod report {
    use crate::report;
    use tilekeys_core::config::{
        BindingTable, Keybind, Modifier,
        command::{Command as _, NextLayout, NormalizedCommand, Spawn},
        group::groups_from_names,
    };

    #[test]
    fn keys_are_aligned_in_columns() {
        let explicit = vec![
            Keybind::new(
                Spawn::new("alacritty").normalize().unwrap(),
                [Modifier::Mod4].into_iter().collect(),
                "Return",
                Some("Launch terminal".to_owned()),
            )
            .unwrap(),
            Keybind::new(
                NextLayout::new().normalize().unwrap(),
                [Modifier::Mod4].into_iter().collect(),
                "Tab",
                None,
            )
            .unwrap(),
            Keybind::new(
                NormalizedCommand("Teleport".to_owned()),
                Default::default(),
                "F1",
                None,
            )
            .unwrap(),
        ];
        let output = report::keys(&BindingTable::new(explicit, Vec::new()));
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(
            lines,
            vec![
                "mod4+Return  spawn(\"alacritty\")  Launch terminal",
                "mod4+Tab     next_layout()",
                "F1           <unknown command>",
            ]
        );
    }

    #[test]
    fn groups_list_their_number_key() {
        let groups = groups_from_names(&["web", "mail"]).unwrap();
        assert_eq!(report::groups(&groups), "1  web\n2  mail\n");
    }
}

/// Watch Testing
#[cfg(test)]
mod watch {
    use crate::errors::CliError;
    use crate::watch::{ConfigWatcher, Watcher, write_snapshot};
    use std::{fs, path::Path};
    use tilekeys_core::config::Snapshot;

    fn groups_in(output: &Path) -> usize {
        let contents = fs::read_to_string(output).unwrap();
        Snapshot::from_ron(&contents).unwrap().groups.len()
    }

    #[tokio::test]
    async fn apply_publishes_and_keeps_previous_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.ron");
        let output = dir.path().join("run").join("snapshot.ron");
        let partial = output.with_extension("ron.partial");

        fs::write(&config_path, r#"(groups: ["web"])"#).unwrap();
        let mut watcher = Watcher::new(config_path.clone(), output.clone());
        watcher.apply().await.unwrap();
        assert_eq!(groups_in(&output), 1);
        assert_eq!(watcher.generation(), 1);
        let first = fs::read_to_string(&output).unwrap();

        fs::write(&config_path, r#"(groups: ["web""#).unwrap();
        watcher.apply().await.unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), first);
        assert!(!partial.exists());
        assert_eq!(watcher.generation(), 1);

        fs::write(&config_path, r#"(groups: ["web", "mail"])"#).unwrap();
        watcher.apply().await.unwrap();
        assert_eq!(groups_in(&output), 2);
        assert_eq!(watcher.generation(), 2);
    }

    #[tokio::test]
    async fn first_load_must_succeed() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("snapshot.ron");
        let mut watcher = Watcher::new(dir.path().join("config.ron"), output.clone());

        assert!(matches!(
            watcher.apply().await,
            Err(CliError::NoConfigFound(_))
        ));
        assert!(!output.exists());
        assert_eq!(watcher.generation(), 0);
    }

    #[tokio::test]
    async fn failed_write_keeps_previous_generation() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.ron");
        let output = dir.path().join("snapshot.ron");

        fs::write(&config_path, r#"(groups: ["web"])"#).unwrap();
        let mut watcher = Watcher::new(config_path.clone(), output.clone());
        watcher.apply().await.unwrap();

        // A directory in place of the snapshot makes the rename fail.
        fs::remove_file(&output).unwrap();
        fs::create_dir(&output).unwrap();
        fs::write(&config_path, r#"(groups: ["web", "mail"])"#).unwrap();

        watcher.apply().await.unwrap();
        assert_eq!(watcher.generation(), 1);
        assert!(output.is_dir());
        assert!(!output.with_extension("ron.partial").exists());
    }

    #[tokio::test]
    async fn write_snapshot_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("a").join("b").join("snapshot.ron");

        write_snapshot(&output, "()").await.unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), "()");
        assert!(!output.with_extension("ron.partial").exists());
    }

    #[tokio::test]
    async fn check_watcher() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.ron");
        fs::write(&config_path, "()").unwrap();
        let watcher = ConfigWatcher::new(&config_path).unwrap();
        assert!(!watcher.has_changed());

        fs::write(dir.path().join("other.ron"), "()").unwrap();
        assert!(!watcher.has_changed());

        fs::write(&config_path, "()").unwrap();
        assert!(watcher.has_changed());

        let replacement = dir.path().join("config.ron.new");
        fs::write(&replacement, r#"(groups: ["web"])"#).unwrap();
        let _ = watcher.has_changed();
        fs::rename(&replacement, &config_path).unwrap();
        assert!(watcher.has_changed());
    }
}

/// Run Testing
#[cfg(test)]
mod run {
    use crate::{config::Config, errors::CliError, run_combo};
    use std::convert::TryFrom;
    use tilekeys_core::config::Snapshot;
    use tilekeys_core::errors::TileError;

    fn snapshot() -> Snapshot {
        Config::try_from(
            r#"(
                keybinds: [
                    (command: Spawn("true"), modifier: ["mod"], key: Key("t")),
                    (command: Shutdown, modifier: ["mod", "control"], key: Key("q")),
                ],
            )"#
            .to_owned(),
        )
        .unwrap()
        .compile()
        .unwrap()
    }

    #[test]
    fn spawn_binding_starts_the_program() {
        let mut child = run_combo(&snapshot(), "mod4+t").unwrap();
        assert!(child.wait().unwrap().success());
    }

    #[test]
    fn internal_binding_cannot_run() {
        assert!(matches!(
            run_combo(&snapshot(), "control+mod4+q"),
            Err(CliError::Config(TileError::NotSpawnable(call))) if call == "shutdown()"
        ));
    }

    #[test]
    fn unbound_or_malformed_combo() {
        assert!(matches!(
            run_combo(&snapshot(), "mod4+z"),
            Err(CliError::Config(TileError::BindingNotFound(combo))) if combo == "mod4+z"
        ));
        assert!(matches!(
            run_combo(&snapshot(), "mod4+"),
            Err(CliError::Config(TileError::InvalidCombo(_)))
        ));
    }
}
