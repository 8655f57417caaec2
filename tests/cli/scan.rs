use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_scan_reports_without_writing() -> Result<()> {
    let test = CliTest::with_project(&[(
        "src/App.jsx",
        r#"export const App = ({ on }) => <i className={on ? "icon icon-home" : "icon icon-user"} />;"#,
    )])?;

    let output = test.scan_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert_eq!(
        stdout(&output),
        "  icon-home  \\e600\n  icon-user  \\e601\nWould write src/assets/iconfont/iconfont-min\n✓ Scanned 1 source file - 2 glyphs would be kept\nRun icon-purge purge to write them.\n"
    );
    assert!(!test.root().join("src/assets/iconfont/iconfont-min").exists());

    Ok(())
}

#[test]
fn test_scan_verbose_lists_files_and_classes() -> Result<()> {
    let test = CliTest::with_project(&[
        ("src/App.jsx", r#"export const App = () => <i className="icon icon-home" />;"#),
        ("src/Button.tsx", r#"export const Button = () => <button className="btn" />;"#),
    ])?;

    let output = test.scan_command().arg("--verbose").output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let stdout = stdout(&output);
    assert!(stdout.contains("Scanned (2 files):\n  src/App.jsx\n  src/Button.tsx\n"), "{stdout}");
    assert!(stdout.contains("Used classes (3):\n  btn\n  icon\n  icon-home\n"), "{stdout}");
    assert!(stdout.contains("Retained glyphs (1):\n  icon-home  \\e600  line 11\n"), "{stdout}");

    Ok(())
}

#[test]
fn test_scan_with_root_and_config_flags() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("web/src/App.jsx", r#"export const App = () => <i className="icon-home" />;"#)?;
    test.write_file("web/src/assets/iconfont/iconfont.css", crate::ICONFONT_CSS)?;
    test.write_file("web/src/assets/iconfont/iconfont.ttf", "placeholder font")?;
    test.write_file("web/purge.json", crate::CONFIG)?;

    let output = test
        .scan_command()
        .args(["--root", "web", "--config", "purge.json"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("1 glyph would be kept"));

    Ok(())
}

#[test]
fn test_scan_fails_on_missing_stylesheet_reference() -> Result<()> {
    let test = CliTest::with_project(&[])?;
    std::fs::remove_file(test.root().join("src/assets/iconfont/iconfont.css"))?;

    let output = test.scan_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("`iconfontCssPath` file does not exist"));

    Ok(())
}

#[test]
fn test_no_subcommand_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("Usage:"));

    Ok(())
}
