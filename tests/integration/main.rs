//! Integration tests for glance-volumes

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use std::path::Path;
    use tempfile::TempDir;

    const CEPH_CONFIG: &str = r#"
[instance]
name = "glance"
pvc_name = "glance-pvc"
secrets = ["tls-certs"]

[propagation]
init = ["DBSync"]

[[extra_mounts]]
name = "ceph"

[[extra_mounts.extraVol]]
propagation = ["GlanceAPI"]
extraVolType = "Ceph"
volumes = [{ name = "ceph", secret = { secretName = "ceph-conf-files" } }]
mounts = [{ name = "ceph", mountPath = "/etc/ceph", readOnly = true }]
"#;

    fn glance_volumes() -> Command {
        let mut cmd = cargo_bin_cmd!("glance-volumes");
        cmd.env_remove("GLANCE_VOLUMES_CONFIG")
            .env_remove("GLANCE_VOLUMES_LOG_FORMAT");
        cmd
    }

    fn write_config(dir: &Path, content: &str) -> std::path::PathBuf {
        let path = dir.join("config.toml");
        std::fs::write(&path, content).unwrap();
        path
    }

    fn run_json(config: &Path, args: &[&str]) -> serde_json::Value {
        let output = glance_volumes()
            .arg("--no-local")
            .arg("--config")
            .arg(config)
            .args(args)
            .args(["--format", "json"])
            .output()
            .unwrap();
        assert!(output.status.success(), "command failed: {:?}", output);
        serde_json::from_slice(&output.stdout).unwrap()
    }

    fn names(value: &serde_json::Value) -> Vec<String> {
        value
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v["name"].as_str().unwrap().to_string())
            .collect()
    }

    #[test]
    fn help_displays() {
        glance_volumes()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Glance"))
            .stdout(predicate::str::contains("volumes"))
            .stdout(predicate::str::contains("mounts"))
            .stdout(predicate::str::contains("secrets"));
    }

    #[test]
    fn version_displays() {
        glance_volumes()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("glance-volumes"));
    }

    #[test]
    fn volumes_json_base_then_extra_then_secret() {
        let temp = TempDir::new().unwrap();
        let config = write_config(temp.path(), CEPH_CONFIG);

        let volumes = run_json(&config, &["volumes"]);

        assert_eq!(
            names(&volumes),
            [
                "scripts",
                "config-data",
                "config-data-merged",
                "lib-data",
                "ceph",
                "tls-certs"
            ]
        );
        assert_eq!(volumes[0]["configMap"]["defaultMode"], 493);
        assert_eq!(volumes[3]["persistentVolumeClaim"]["claimName"], "glance-pvc");
        assert_eq!(volumes[5]["secret"]["defaultMode"], 416);
    }

    #[test]
    fn scope_flag_overrides_config() {
        let temp = TempDir::new().unwrap();
        let config = write_config(temp.path(), CEPH_CONFIG);

        let volumes = run_json(&config, &["volumes", "--scope", "DBSync"]);

        assert!(!names(&volumes).contains(&"ceph".to_string()));
    }

    #[test]
    fn init_mounts_use_init_scopes() {
        let temp = TempDir::new().unwrap();
        let config = write_config(temp.path(), CEPH_CONFIG);

        let mounts = run_json(&config, &["mounts", "init"]);

        assert_eq!(
            names(&mounts),
            ["scripts", "config-data", "config-data-merged", "tls-certs"]
        );
        assert_eq!(mounts[1]["mountPath"], "/var/lib/config-data/default");
        assert_eq!(mounts[3]["mountPath"], "/var/lib/config-data/secret-0");
    }

    #[test]
    fn runtime_mounts_include_extension() {
        let temp = TempDir::new().unwrap();
        let config = write_config(temp.path(), CEPH_CONFIG);

        let mounts = run_json(&config, &["mounts", "runtime"]);

        assert_eq!(
            names(&mounts),
            ["scripts", "config-data-merged", "lib-data", "ceph", "tls-certs"]
        );
        assert_eq!(mounts[2]["mountPath"], "/var/lib/glance");
        assert_eq!(mounts[2]["readOnly"], false);
    }

    #[test]
    fn secrets_from_arguments() {
        let temp = TempDir::new().unwrap();
        let config = write_config(temp.path(), "");

        let projection = run_json(&config, &["secrets", "s1", "s2"]);

        assert_eq!(names(&projection["volumes"]), ["s1", "s2"]);
        assert_eq!(
            projection["volumeMounts"][1]["mountPath"],
            "/var/lib/config-data/secret-1"
        );
    }

    #[test]
    fn volumes_table_output() {
        let temp = TempDir::new().unwrap();
        let config = write_config(temp.path(), "");

        glance_volumes()
            .args(["--no-local", "--config"])
            .arg(&config)
            .arg("volumes")
            .assert()
            .success()
            .stdout(predicate::str::contains("glance-scripts"))
            .stdout(predicate::str::contains("0755"))
            .stdout(predicate::str::contains("4 volume(s)"));
    }

    #[test]
    fn missing_explicit_config_fails() {
        let temp = TempDir::new().unwrap();

        glance_volumes()
            .args(["--no-local", "--config"])
            .arg(temp.path().join("missing.toml"))
            .arg("volumes")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Configuration file not found"))
            .stderr(predicate::str::contains("config init"));
    }

    #[test]
    fn invalid_config_fails() {
        let temp = TempDir::new().unwrap();
        let config = write_config(temp.path(), "[instance]\nsecrets = 3\n");

        glance_volumes()
            .args(["--no-local", "--config"])
            .arg(&config)
            .arg("volumes")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid configuration"));
    }

    #[test]
    fn defaults_shown_despite_invalid_config() {
        let temp = TempDir::new().unwrap();
        let config = write_config(temp.path(), "[instance]\nsecrets = 3\n");

        glance_volumes()
            .args(["--no-local", "--config"])
            .arg(&config)
            .args(["config", "show", "--defaults"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[instance]"))
            .stdout(predicate::str::contains("name = \"glance\""));
    }

    #[test]
    fn invalid_global_blamed_over_valid_local() {
        let temp = TempDir::new().unwrap();
        let config = write_config(temp.path(), "[instance]\nsecrets = 3\n");
        let project = temp.path().join("project");
        std::fs::create_dir_all(&project).unwrap();
        std::fs::write(
            project.join(".glance-volumes.toml"),
            "[instance]\nname = \"glance-edge\"\n",
        )
        .unwrap();

        glance_volumes()
            .current_dir(&project)
            .arg("--config")
            .arg(&config)
            .arg("volumes")
            .assert()
            .failure()
            .stderr(predicate::str::contains("config.toml"))
            .stderr(predicate::str::contains(".glance-volumes.toml").not());
    }

    #[test]
    fn empty_secrets_json_is_pretty_projection() {
        let temp = TempDir::new().unwrap();
        let config = write_config(temp.path(), "");

        let output = glance_volumes()
            .args(["--no-local", "--config"])
            .arg(&config)
            .args(["secrets", "--format", "json"])
            .output()
            .unwrap();
        assert!(output.status.success());

        let projection: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(projection["volumes"], serde_json::json!([]));
        assert_eq!(projection["volumeMounts"], serde_json::json!([]));

        let expected = serde_json::to_string_pretty(&projection).unwrap();
        assert_eq!(String::from_utf8(output.stdout).unwrap().trim_end(), expected);
    }

    #[test]
    fn config_init_then_show() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("glance").join("config.toml");

        glance_volumes()
            .args(["--no-local", "--config"])
            .arg(&path)
            .args(["config", "init"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Configuration initialized"));

        glance_volumes()
            .args(["--no-local", "--config"])
            .arg(&path)
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[instance]"))
            .stdout(predicate::str::contains("GlanceAPI"));
    }

    #[test]
    fn config_path_does_not_require_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("absent.toml");

        glance_volumes()
            .arg("--config")
            .arg(&path)
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("absent.toml"));
    }

    #[test]
    fn local_config_overrides_global() {
        let temp = TempDir::new().unwrap();
        let config = write_config(temp.path(), "[instance]\nname = \"glance\"\n");
        let project = temp.path().join("project");
        std::fs::create_dir_all(&project).unwrap();
        std::fs::write(
            project.join(".glance-volumes.toml"),
            "[instance]\nname = \"glance-edge\"\n",
        )
        .unwrap();

        glance_volumes()
            .current_dir(&project)
            .arg("--config")
            .arg(&config)
            .args(["volumes"])
            .assert()
            .success()
            .stdout(predicate::str::contains("glance-edge-config-data"));
    }
}

mod compose_tests {
    use glance_volumes::storage::{names, DB_SYNC_PROPAGATION, GLANCE_API_PROPAGATION};
    use glance_volumes::{
        compose_init_mounts, compose_runtime_mounts, compose_volumes, expand_secrets,
        ContributesVolumes, ExtraVolMounts, PropagationType, VolMounts, Volume, VolumeMount,
    };

    const NO_SECRETS: &[&str] = &[];
    const NO_EXTRAS: &[ExtraVolMounts] = &[];

    fn extra(name: &str, tags: &[PropagationType]) -> ExtraVolMounts {
        ExtraVolMounts {
            name: Some(name.to_string()),
            region: None,
            extra_vol: vec![VolMounts {
                propagation: tags.to_vec(),
                extra_vol_type: None,
                volumes: vec![Volume::empty_dir(name)],
                mounts: vec![VolumeMount::writable(name, format!("/mnt/{}", name))],
            }],
        }
    }

    /// Extension whose filter evaluation fails
    struct Unreachable;

    #[derive(Debug, PartialEq)]
    struct FilterError(&'static str);

    impl ContributesVolumes for Unreachable {
        type Error = FilterError;

        fn propagate(&self, _: &[PropagationType]) -> Result<Vec<VolMounts>, FilterError> {
            Err(FilterError("backend unreachable"))
        }
    }

    #[test]
    fn base_volumes_in_fixed_order() {
        for (name, claim) in [("glance", "glance-pvc"), ("x", "y")] {
            let vols = compose_volumes(name, claim, NO_SECRETS, NO_EXTRAS, GLANCE_API_PROPAGATION)
                .unwrap();
            let got: Vec<&str> = vols.iter().map(|v| v.name.as_str()).collect();
            assert_eq!(
                got,
                [
                    names::SCRIPTS,
                    names::CONFIG_DATA,
                    names::CONFIG_DATA_MERGED,
                    names::LIB_DATA
                ]
            );
        }
    }

    #[test]
    fn init_and_runtime_reference_disjoint_raw_and_data() {
        let init = compose_init_mounts(NO_SECRETS, NO_EXTRAS, GLANCE_API_PROPAGATION).unwrap();
        let runtime =
            compose_runtime_mounts(NO_SECRETS, NO_EXTRAS, GLANCE_API_PROPAGATION).unwrap();

        let init_names: Vec<&str> = init.iter().map(|m| m.name.as_str()).collect();
        let runtime_names: Vec<&str> = runtime.iter().map(|m| m.name.as_str()).collect();

        assert_eq!(init_names, ["scripts", "config-data", "config-data-merged"]);
        assert_eq!(runtime_names, ["scripts", "config-data-merged", "lib-data"]);
    }

    #[test]
    fn every_base_mount_references_a_volume() {
        let vols =
            compose_volumes("glance", "pvc", &["a", "b"], NO_EXTRAS, GLANCE_API_PROPAGATION)
                .unwrap();
        let init = compose_init_mounts(&["a", "b"], NO_EXTRAS, GLANCE_API_PROPAGATION).unwrap();
        let runtime =
            compose_runtime_mounts(&["a", "b"], NO_EXTRAS, GLANCE_API_PROPAGATION).unwrap();

        for mount in init.iter().chain(&runtime) {
            assert_eq!(
                vols.iter().filter(|v| v.name == mount.name).count(),
                1,
                "mount {} has no unique volume",
                mount.name
            );
        }
    }

    #[test]
    fn secret_paths_differ_by_ordinal() {
        let (vols, mounts) = expand_secrets(&["s1", "s2"]);

        assert_eq!(vols[0].name, "s1");
        assert_eq!(vols[1].name, "s2");
        let prefix = mounts[0].mount_path.trim_end_matches('0');
        assert_eq!(mounts[1].mount_path, format!("{}1", prefix));
        assert!(mounts.iter().all(|m| m.read_only));
        assert!(vols.iter().all(|v| v.default_mode() == Some(0o640)));
    }

    #[test]
    fn secrets_are_terminal_suffix() {
        let extras = [
            extra("first", &[PropagationType::GLANCE]),
            extra("second", &[PropagationType::GLANCE_API]),
        ];
        let vols = compose_volumes("glance", "pvc", &["s1"], &extras, GLANCE_API_PROPAGATION)
            .unwrap();
        let mounts = compose_runtime_mounts(&["s1"], &extras, GLANCE_API_PROPAGATION).unwrap();

        let vol_names: Vec<&str> = vols.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(&vol_names[4..], ["first", "second", "s1"]);

        let mount_names: Vec<&str> = mounts.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(&mount_names[3..], ["first", "second", "s1"]);
    }

    #[test]
    fn scope_excludes_other_contexts() {
        let extras = [extra("api-only", &[PropagationType::GLANCE_API])];
        let job = compose_init_mounts(NO_SECRETS, &extras, DB_SYNC_PROPAGATION).unwrap();
        assert_eq!(job.len(), 3);
    }

    #[test]
    fn composition_is_idempotent() {
        let extras = [extra("nfs", &[PropagationType::GLANCE])];
        let first = compose_volumes("glance", "pvc", &["s"], &extras, GLANCE_API_PROPAGATION);
        let second = compose_volumes("glance", "pvc", &["s"], &extras, GLANCE_API_PROPAGATION);
        assert_eq!(first, second);
    }

    #[test]
    fn glance_scenario_with_tls_secret() {
        let vols = compose_volumes(
            "glance",
            "glance-pvc",
            &["tls-certs"],
            NO_EXTRAS,
            GLANCE_API_PROPAGATION,
        )
        .unwrap();

        assert_eq!(vols.len(), 5);
        assert_eq!(vols[4].name, "tls-certs");
        assert_eq!(vols[4].default_mode(), Some(0o640));
    }

    #[test]
    fn extension_error_propagates() {
        let err = compose_volumes("glance", "pvc", NO_SECRETS, &[Unreachable], GLANCE_API_PROPAGATION)
            .unwrap_err();
        assert_eq!(err, FilterError("backend unreachable"));

        let err = compose_init_mounts(NO_SECRETS, &[Unreachable], GLANCE_API_PROPAGATION)
            .unwrap_err();
        assert_eq!(err, FilterError("backend unreachable"));
    }
}
