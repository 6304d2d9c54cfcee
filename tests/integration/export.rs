use std::fs;

use anyhow::Result;
use serde_json::{json, Value};
use tempfile::tempdir;

use crate::common::{run_cli, write_config, write_stub_systemctl};

fn prepared_workdir() -> Result<tempfile::TempDir> {
    let temp = tempdir()?;
    let stub = write_stub_systemctl(temp.path(), None)?;
    write_config(temp.path(), &stub)?;
    Ok(temp)
}

fn profiles_literal(config: &str) -> Value {
    let literal = config
        .split("c.ProfilesSpawner.profiles = ")
        .nth(1)
        .expect("generated config must assign the profiles list");
    serde_json::from_str(literal.trim_end()).expect("profiles literal parses as JSON")
}

#[tokio::test]
async fn export_renders_the_documented_example() -> Result<()> {
    let temp = prepared_workdir()?;
    fs::write(
        temp.path().join("profiles.json"),
        serde_json::to_string_pretty(&json!([{
            "name": "Project 1 Environment",
            "shortname": "project1",
            "dir": "/path/to/project1",
            "env_path": "/path/to/project1/venv",
            "args": ["--ServerApp.default_url=/lab"]
        }]))?,
    )?;

    let run = run_cli(temp.path(), &["export"]).await?;

    assert!(run.success, "stderr: {}", run.stderr);
    assert!(
        run.stdout
            .contains("Exported 1 profile(s) to jupyterhub_config.py."),
        "stdout: {}",
        run.stdout
    );

    let config = fs::read_to_string(temp.path().join("jupyterhub_config.py"))?;
    assert!(config.contains("from wrapspawner import ProfilesSpawner"));
    assert_eq!(
        profiles_literal(&config),
        json!([[
            "Project 1 Environment",
            "project1",
            "jupyterhub.spawner.LocalProcessSpawner",
            {
                "cmd": [
                    "/bin/bash",
                    "-c",
                    "source /path/to/project1/venv/bin/activate && cd /path/to/project1 && exec jupyterhub-singleuser --ServerApp.default_url=/lab"
                ]
            }
        ]])
    );
    Ok(())
}

#[tokio::test]
async fn export_applies_env_path_and_class_defaults() -> Result<()> {
    let temp = prepared_workdir()?;
    run_cli(temp.path(), &["add", "Lab", "lab", "/srv/lab"]).await?;

    let run = run_cli(temp.path(), &["export"]).await?;

    assert!(run.success, "stderr: {}", run.stderr);
    let config = fs::read_to_string(temp.path().join("jupyterhub_config.py"))?;
    let rendered = profiles_literal(&config);
    assert_eq!(rendered[0][2], "jupyterhub.spawner.LocalProcessSpawner");
    assert_eq!(
        rendered[0][3]["cmd"][2],
        "source /srv/lab/.venv/bin/activate && cd /srv/lab && exec jupyterhub-singleuser"
    );
    Ok(())
}

#[tokio::test]
async fn export_honours_json_path_and_config_path_overrides() -> Result<()> {
    let temp = prepared_workdir()?;
    let other_store = temp.path().join("other-profiles.json");
    fs::write(
        &other_store,
        serde_json::to_string(&json!([
            {"name": "A", "shortname": "a", "dir": "/srv/a"},
            {"name": "B", "shortname": "b", "dir": "/srv/b"}
        ]))?,
    )?;
    let target = temp.path().join("generated").join("hub_config.py");
    fs::create_dir_all(target.parent().expect("target has a parent"))?;

    let run = run_cli(
        temp.path(),
        &[
            "export",
            "--json_path",
            other_store.to_str().expect("utf-8 path"),
            "--config_path",
            target.to_str().expect("utf-8 path"),
        ],
    )
    .await?;

    assert!(run.success, "stderr: {}", run.stderr);
    assert!(
        run.stdout.contains("Exported 2 profile(s)"),
        "stdout: {}",
        run.stdout
    );
    let rendered = profiles_literal(&fs::read_to_string(&target)?);
    assert_eq!(rendered.as_array().map(Vec::len), Some(2));
    assert_eq!(rendered[1][1], "b");
    Ok(())
}

#[tokio::test]
async fn export_without_a_store_fails_with_not_found() -> Result<()> {
    let temp = prepared_workdir()?;

    let run = run_cli(temp.path(), &["export"]).await?;

    assert!(!run.success, "missing store must fail");
    assert!(
        run.stderr.contains("does not exist"),
        "stderr: {}",
        run.stderr
    );
    assert!(
        !temp.path().join("jupyterhub_config.py").exists(),
        "no config file may be written on failure"
    );
    Ok(())
}
