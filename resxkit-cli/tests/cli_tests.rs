use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const SOURCE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<root>
  <resheader name="resmimetype">
    <value>text/microsoft-resx</value>
  </resheader>
  <data name="Title" xml:space="preserve">
    <value>Main window</value>
  </data>
  <data name="Logo" type="System.Resources.ResXFileRef, System.Windows.Forms">
    <value>Resources\logo.png;System.Drawing.Bitmap, System.Drawing</value>
  </data>
  <data name="Greeting" xml:space="preserve">
    <value>Hello</value>
    <comment>!EDIT reviewed</comment>
  </data>
  <data name="Farewell" xml:space="preserve">
    <value>Bye</value>
  </data>
  <data name="&gt;&gt;Form.Name" xml:space="preserve">
    <value>MainForm</value>
  </data>
</root>
"#;

const TARGET: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<root>
  <data name="Greeting" xml:space="preserve">
    <value>Bonjour</value>
  </data>
  <data name="Farewell" xml:space="preserve">
    <value />
  </data>
</root>
"#;

fn resxkit(dir: &Path, args: &[&str]) -> Output {
    Command::new(assert_cmd::cargo::cargo_bin!("resxkit"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("failed to run resxkit")
}

fn setup() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("Strings.resx"), SOURCE).unwrap();
    fs::write(temp_dir.path().join("Strings.fr.resx"), TARGET).unwrap();
    temp_dir
}

fn stdout_lines(out: &Output) -> Vec<String> {
    String::from_utf8_lossy(&out.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_new_lists_missing_and_edit_flagged_strings() {
    let temp_dir = setup();
    let out = resxkit(
        temp_dir.path(),
        &["new", "--source", "Strings.resx", "--target", "Strings.fr.resx"],
    );
    assert!(
        out.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&out.stderr)
    );
    assert_eq!(stdout_lines(&out), vec!["Title", "Greeting"]);
    assert!(!String::from_utf8_lossy(&out.stdout).contains(">>Form.Name"));
}

#[test]
fn test_new_with_missing_target_lists_everything() {
    let temp_dir = setup();
    let out = resxkit(
        temp_dir.path(),
        &[
            "new",
            "--source",
            "Strings.resx",
            "--target",
            "Strings.de.resx",
            "--json",
        ],
    );
    assert!(out.status.success());

    let report: Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report["target_available"], false);
    let names: Vec<_> = report["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Title", "Greeting", "Farewell"]);
}

#[test]
fn test_empty_lists_blank_translations() {
    let temp_dir = setup();
    let out = resxkit(
        temp_dir.path(),
        &[
            "empty",
            "--source",
            "Strings.resx",
            "--target",
            "Strings.fr.resx",
            "--json",
        ],
    );
    assert!(out.status.success());

    let report: Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report["target_available"], true);
    let entries = report["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["name"], "Farewell");
    assert_eq!(entries[0]["value"], "Bye");
}

#[test]
fn test_sort_writes_canonical_order() {
    let temp_dir = setup();
    let out = resxkit(
        temp_dir.path(),
        &["sort", "--input", "Strings.resx", "--output", "Sorted.resx"],
    );
    assert!(
        out.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&out.stderr)
    );

    let sorted = fs::read_to_string(temp_dir.path().join("Sorted.resx")).unwrap();
    let farewell = sorted.find("name=\"Farewell\"").unwrap();
    let greeting = sorted.find("name=\"Greeting\"").unwrap();
    let title = sorted.find("name=\"Title\"").unwrap();
    let logo = sorted.find("name=\"Logo\"").unwrap();
    assert!(farewell < greeting && greeting < title && title < logo);
    assert!(sorted.contains("<resheader name=\"resmimetype\">"));

    // The input file is untouched when an output is given.
    let original = fs::read_to_string(temp_dir.path().join("Strings.resx")).unwrap();
    assert_eq!(original, SOURCE);
}

#[test]
fn test_sort_rejects_malformed_file_reference() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("Broken.resx"),
        r#"<root><data name="Logo" type="ResXFileRef"><value>logo.png</value></data></root>"#,
    )
    .unwrap();

    let out = resxkit(temp_dir.path(), &["sort", "--input", "Broken.resx"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("malformed file reference"), "stderr: {stderr}");
}

#[test]
fn test_merge_hints_updates_in_place_and_is_idempotent() {
    let temp_dir = setup();
    fs::write(
        temp_dir.path().join("hints.xml"),
        r#"<hints>
  <hint name="Farewell"><preferred>Au revoir</preferred></hint>
  <hint name="Greeting"><preferred>Bonjour</preferred></hint>
  <hint name="Unknown"><preferred>?</preferred></hint>
</hints>"#,
    )
    .unwrap();

    let args = [
        "merge-hints",
        "--input",
        "Strings.fr.resx",
        "--hints",
        "hints.xml",
    ];
    let out = resxkit(temp_dir.path(), &args);
    assert!(
        out.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&out.stderr)
    );
    assert_eq!(stdout_lines(&out), vec!["1 entries updated"]);

    let updated = fs::read_to_string(temp_dir.path().join("Strings.fr.resx")).unwrap();
    assert!(updated.contains("<value>Au revoir</value>"));

    let out = resxkit(temp_dir.path(), &args);
    assert!(out.status.success());
    assert_eq!(stdout_lines(&out), vec!["0 entries updated"]);
}

#[test]
fn test_merge_hints_rejects_incomplete_hint() {
    let temp_dir = setup();
    fs::write(
        temp_dir.path().join("hints.xml"),
        r#"<hints>
  <hint name="Farewell"><preferred>Au revoir</preferred></hint>
  <hint name="Greeting" />
</hints>"#,
    )
    .unwrap();

    let out = resxkit(
        temp_dir.path(),
        &[
            "merge-hints",
            "--input",
            "Strings.fr.resx",
            "--hints",
            "hints.xml",
        ],
    );
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("invalid hint #1"));

    let target = fs::read_to_string(temp_dir.path().join("Strings.fr.resx")).unwrap();
    assert_eq!(target, TARGET);
}

#[test]
fn test_status_uses_config_file() {
    let temp_dir = setup();
    fs::write(
        temp_dir.path().join("resxkit.toml"),
        "source = \"Strings.resx\"\ncultures = [\"fr\", \"de\"]\n",
    )
    .unwrap();

    let out = resxkit(temp_dir.path(), &["status", "--json"]);
    assert!(
        out.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&out.stderr)
    );

    let report: Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report["translatable"], 3);
    let cultures = report["cultures"].as_array().unwrap();
    assert_eq!(cultures[0]["culture"], "fr");
    assert_eq!(cultures[0]["new"], 2);
    assert_eq!(cultures[0]["empty"], 1);
    assert_eq!(cultures[1]["culture"], "de");
    assert_eq!(cultures[1]["target_available"], false);
    assert_eq!(cultures[1]["new"], 3);
}

#[test]
fn test_status_command_line_overrides() {
    let temp_dir = setup();
    let out = resxkit(
        temp_dir.path(),
        &["status", "--source", "Strings.resx", "--culture", "fr"],
    );
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("3 translatable strings"));
    assert!(stdout.contains("fr"));
}

#[test]
fn test_strict_flag_rejects_nameless_data() {
    let temp_dir = TempDir::new().unwrap();
    let nameless = r#"<root><data xml:space="preserve"><value>x</value></data></root>"#;
    fs::write(temp_dir.path().join("Nameless.resx"), nameless).unwrap();

    let out = resxkit(
        temp_dir.path(),
        &["sort", "--input", "Nameless.resx", "--output", "Out.resx"],
    );
    assert!(out.status.success());

    let out = resxkit(
        temp_dir.path(),
        &["sort", "--strict", "--input", "Nameless.resx", "--output", "Out.resx"],
    );
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("missing 'name'"));
}

#[test]
fn test_missing_source_fails() {
    let temp_dir = TempDir::new().unwrap();
    let out = resxkit(
        temp_dir.path(),
        &["new", "--source", "Nope.resx", "--target", "Nope.fr.resx"],
    );
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).starts_with("Error: Cannot read"));
}
