use assert_cmd::Command;
use predicates::prelude::*;

fn topo(args: &[&str]) -> anyhow::Result<serde_json::Value> {
    let mut cmd = Command::cargo_bin("quadview")?;
    let output = cmd
        .arg("topo")
        .arg("tests/result/quadclass.json")
        .args(args)
        .output()?;
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    Ok(serde_json::from_str(&stdout)?)
}

#[test]
fn command_topo() -> anyhow::Result<()> {
    let json = topo(&[])?;

    let rows = json["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["candidates"].as_array().unwrap().len(), 2);
    assert_eq!(rows[0]["candidates"][0]["topologyCode"], "LPL");
    assert_eq!(rows[0]["candidates"][0]["reasons"][0]["code"], "length_match");
    assert_eq!(rows[0]["candidates"][0]["reasons"][0]["argument"], "1-1-1");
    assert_eq!(rows[0]["icons"][1], serde_json::json!(["d", "d", "l"]));
    assert_eq!(rows[1]["row"], 2);
    assert!(json.get("expanded").is_none());

    Ok(())
}

#[test]
fn command_topo_expand() -> anyhow::Result<()> {
    let json = topo(&["--expand", "0", "--info-dir", "tests/gqclass"])?;

    let expanded = &json["expanded"];
    assert_eq!(expanded["row"], 0);
    let panels = expanded["panels"].as_array().unwrap();
    assert_eq!(panels.len(), 2);

    assert_eq!(panels[0]["index"], 0);
    assert_eq!(panels[0]["info"]["name"], "Parallel propeller (LPL)");
    assert_eq!(panels[0]["info"]["image"], "lpl");
    assert!(panels[0]["info"]["description"]
        .as_str()
        .unwrap()
        .contains("<em>propeller</em>"));
    assert!(panels[0]["evidence"][0]
        .as_str()
        .unwrap()
        .contains("<i>( P-value = 0.01 )</i>"));

    assert_eq!(panels[1]["info"]["name"], "Basket type (DDL)");
    assert!(panels[1]["info"]["description"]
        .as_str()
        .unwrap()
        .contains("<strong>diagonal</strong>"));

    Ok(())
}

#[test]
fn command_topo_expand_other() -> anyhow::Result<()> {
    let json = topo(&["-e", "0", "-e", "2", "--info-dir", "tests/gqclass"])?;

    // only the last opened row stays expanded
    let expanded = &json["expanded"];
    assert_eq!(expanded["row"], 2);
    let panels = expanded["panels"].as_array().unwrap();
    assert_eq!(panels.len(), 1);
    assert_eq!(panels[0]["candidate"]["name"], "chair");
    // no description for this class
    assert!(panels[0]["info"].is_null());

    Ok(())
}

#[test]
fn command_topo_collapse() -> anyhow::Result<()> {
    let json = topo(&["-e", "2", "-e", "2"])?;
    assert!(json.get("expanded").is_none());

    // the row without topology cannot be expanded
    let json = topo(&["-e", "1"])?;
    assert!(json.get("expanded").is_none());

    Ok(())
}

#[test]
fn command_topo_no_field() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("quadview")?;
    cmd.arg("topo")
        .arg("tests/result/score.json")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    Ok(())
}
