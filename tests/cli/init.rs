use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

const CONFIG_FILE: &str = "react-unused-icon-purge.json";

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Created"));

    let content = test.read_file(CONFIG_FILE)?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["entry"], serde_json::json!(["src"]));
    assert_eq!(parsed["iconfontCssPath"], "src/assets/iconfont/iconfont.css");
    assert_eq!(parsed["fontTTFPath"], "src/assets/iconfont/iconfont.ttf");
    assert_eq!(parsed["iconPrefix"], "iconfont");
    assert!(content.contains("\n  \"entry\""), "Config should use 2-space indentation");

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(CONFIG_FILE, "{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "\u{2718} react-unused-icon-purge.json already exists\n"
    );
    assert_eq!(test.read_file(CONFIG_FILE)?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.command().arg("init").output()?;

    test.write_file(
        "src/App.jsx",
        r#"export const App = () => <i className="iconfont icon-home" />;"#,
    )?;
    test.write_file("src/assets/iconfont/iconfont.css", crate::ICONFONT_CSS)?;
    test.write_file("src/assets/iconfont/iconfont.ttf", "placeholder font")?;

    let output = test.scan_command().output()?;
    assert!(
        output.status.success(),
        "Scan should work with initialized config. stderr: {}",
        stderr(&output)
    );
    assert!(stdout(&output).contains("1 glyph would be kept"));

    Ok(())
}
