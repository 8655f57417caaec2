#![cfg(unix)]

use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

const MIN_DIR: &str = "src/assets/iconfont/iconfont-min";

const APP: &str = r#"
export default function App() {
    return (
        <nav>
            <i className="icon icon-home" />
        </nav>
    );
}
"#;

#[test]
fn test_purge_keeps_only_used_glyphs() -> Result<()> {
    let test = CliTest::with_project(&[("src/App.jsx", APP)])?;

    let output = test.purge_command()?.output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert_eq!(
        test.read_file(&format!("{MIN_DIR}/iconfont.css"))?,
        r#"/* Auto-generated minified iconfont */

@font-face {
  font-family: "iconfont";
  src: url('iconfont.ttf?t=1') format('truetype');
}
.icon {
  font-family: "iconfont" !important;
  font-size: 16px;
}

.icon-home:before {
  content: "\e600";
}"#
    );

    // The fake subsetter records its arguments in the font it "writes".
    assert_eq!(
        test.read_file(&format!("{MIN_DIR}/iconfont.ttf"))?,
        "src/assets/iconfont/iconfont.ttf\n--unicodes=U+E600\n--no-hinting\n--output-file=src/assets/iconfont/iconfont-min/iconfont.ttf\n"
    );

    let stdout = stdout(&output);
    assert!(stdout.contains("Scanned 1 source file - kept 1 glyph"), "{stdout}");
    assert!(stdout.contains("iconfont-min/iconfont.css"), "{stdout}");

    // The placeholder font cannot be inspected, which is only a warning.
    assert!(stderr(&output).contains("cannot inspect font"));

    Ok(())
}

#[test]
fn test_purge_resolves_dynamic_class_names() -> Result<()> {
    let test = CliTest::with_project(&[(
        "src/components/Toggle.tsx",
        r#"
        import cx from "classnames";

        export function Toggle({ on }: { on: boolean }) {
            return <i className={cx("icon", `icon-${on ? "home" : "user"}`)} />;
        }
        "#,
    )])?;

    let output = test.purge_command()?.output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let css = test.read_file(&format!("{MIN_DIR}/iconfont.css"))?;
    assert!(css.contains(".icon-home:before"));
    assert!(css.contains(".icon-user:before"));
    assert!(
        test.read_file(&format!("{MIN_DIR}/iconfont.ttf"))?
            .contains("--unicodes=U+E600,U+E601")
    );

    Ok(())
}

#[test]
fn test_excluded_paths_contribute_nothing() -> Result<()> {
    let test = CliTest::with_project(&[
        ("src/App.jsx", APP),
        (
            "src/legacy/Old.jsx",
            r#"export const Old = () => <i className="icon icon-user" />;"#,
        ),
    ])?;
    test.write_file(
        "react-unused-icon-purge.json",
        r#"{
  "entry": ["src"],
  "iconfontCssPath": "src/assets/iconfont/iconfont.css",
  "fontTTFPath": "src/assets/iconfont/iconfont.ttf",
  "iconPrefix": "icon",
  "excludeFilePath": ["src/legacy"]
}"#,
    )?;

    let output = test.purge_command()?.output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let css = test.read_file(&format!("{MIN_DIR}/iconfont.css"))?;
    assert!(css.contains(".icon-home:before"));
    assert!(!css.contains(".icon-user:before"));

    Ok(())
}

#[test]
fn test_exclude_classes_are_always_kept() -> Result<()> {
    let test = CliTest::with_project(&[("src/App.jsx", APP)])?;
    test.write_file(
        "react-unused-icon-purge.json",
        r#"{
  "entry": ["src"],
  "iconfontCssPath": "src/assets/iconfont/iconfont.css",
  "fontTTFPath": "src/assets/iconfont/iconfont.ttf",
  "iconPrefix": "icon",
  "excludeClasses": ["icon-user"]
}"#,
    )?;

    let output = test.purge_command()?.output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let css = test.read_file(&format!("{MIN_DIR}/iconfont.css"))?;
    assert!(css.contains(".icon-user:before"));

    Ok(())
}

#[test]
fn test_nothing_written_without_used_glyphs() -> Result<()> {
    let test = CliTest::with_project(&[(
        "src/App.jsx",
        r#"export const App = () => <button className="btn primary" />;"#,
    )])?;

    let output = test.purge_command()?.output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert!(!test.root().join(MIN_DIR).exists());
    assert!(stdout(&output).contains("nothing written"));

    Ok(())
}

#[test]
fn test_unresolved_expressions_are_reported() -> Result<()> {
    let test = CliTest::with_project(&[
        ("src/App.jsx", APP),
        (
            "src/Icon.jsx",
            "export const Icon = ({ name }) => <i className={`icon icon-${name}`} />;\n",
        ),
    ])?;

    let output = test.purge_command()?.output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let stderr = stderr(&output);
    assert!(
        stderr.contains(
            "warning: template literal slot is not a literal (identifier `name`); classes derived from it are not retained"
        ),
        "{stderr}"
    );
    assert!(stderr.contains("src/Icon.jsx:1:62"), "{stderr}");
    assert!(stderr.contains("1 className expression could not be resolved"));

    Ok(())
}

#[test]
fn test_unparsable_file_is_skipped() -> Result<()> {
    let test = CliTest::with_project(&[
        ("src/App.jsx", APP),
        ("src/Broken.jsx", "export const Broken = () => <div className=\"icon-user\">;\n"),
    ])?;

    let output = test.purge_command()?.output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert!(stderr(&output).contains("warning: skipped src/Broken.jsx: parse error"));
    let css = test.read_file(&format!("{MIN_DIR}/iconfont.css"))?;
    assert!(css.contains(".icon-home:before"));
    assert!(!css.contains(".icon-user:before"));

    Ok(())
}

#[test]
fn test_subsetter_failure_is_fatal() -> Result<()> {
    let test = CliTest::with_project(&[("src/App.jsx", APP)])?;

    let output = test.failing_purge_command()?.output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("cannot subset this font"));
    assert!(!test.root().join(MIN_DIR).join("iconfont.css").exists());

    Ok(())
}

#[test]
fn test_missing_config_is_fatal() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/App.jsx", APP)?;

    let output = test.purge_command()?.output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("configuration file not found"));

    Ok(())
}

#[test]
fn test_invalid_config_lists_every_violation() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "react-unused-icon-purge.json",
        r#"{ "entry": [], "fontTTFPath": "font.woff", "iconPrefix": "", "extra": true }"#,
    )?;

    let output = test.purge_command()?.output()?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = stderr(&output);
    for violation in [
        "unknown field `extra`",
        "`entry` must list at least one directory",
        "`iconfontCssPath` is required",
        "`fontTTFPath` must end in .ttf or .otf: font.woff",
        "`iconPrefix` must not be empty",
    ] {
        assert!(stderr.contains(violation), "missing {violation:?} in {stderr}");
    }

    Ok(())
}
