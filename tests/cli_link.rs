use assert_cmd::Command;

#[test]
fn command_link() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("quadview")?;
    let output = cmd
        .arg("link")
        .arg("NC_000001")
        .arg("3HSA012345")
        .arg("chr1")
        .output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert_eq!(
        stdout,
        "NC_000001\thttp://www.ncbi.nlm.nih.gov/nuccore/NC_000001\n\
         3HSA012345\thttp://utrdb.ba.itb.cnr.it/getutr/3HSA012345/1\n\
         chr1\t-\n"
    );

    Ok(())
}

#[test]
fn command_link_infile() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("quadview")?;
    let output = cmd
        .arg("link")
        .arg("--infile")
        .arg("tests/result/accessions.txt")
        .output()?;
    let stdout = String::from_utf8(output.stdout)?;

    // the comment line is skipped
    assert_eq!(stdout.lines().count(), 3);
    assert!(stdout.contains("nuccore/NC_000001"));
    assert!(stdout.contains("getutr/3HSA012345/1"));
    assert!(stdout.contains("chr1\t-"));

    Ok(())
}

#[test]
fn command_link_case_sensitive() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("quadview")?;
    let output = cmd.arg("link").arg("nc_000001").arg("4HSA1").output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert_eq!(stdout, "nc_000001\t-\n4HSA1\t-\n");

    Ok(())
}
