use std::fs;
use std::path::PathBuf;

use pacsite_engine::{BuildOptions, build_site, load_site_config, render_applet_launch};

fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data")
}

fn build_fixture_site() -> (tempfile::TempDir, Vec<PathBuf>) {
    let site = load_site_config(fixture_dir().join("site.yaml")).expect("load fixture config");
    let output = tempfile::tempdir().expect("create output dir");
    let options = BuildOptions::new(fixture_dir().join("site")).with_output_dir(output.path());
    let report = build_site(&options, &site).expect("build fixture site");
    (output, report.written)
}

#[test]
fn generates_one_page_per_part_file() {
    let (output, written) = build_fixture_site();
    let names: Vec<_> = written
        .iter()
        .map(|path| path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["debug.html", "index.html", "pacdefence.html"]);
    assert!(written.iter().all(|path| path.starts_with(output.path())));
    assert!(!output.path().join("master.html").exists());
}

#[test]
fn each_page_emphasizes_itself_only() {
    let (output, _) = build_fixture_site();
    for (page, label) in [
        ("index.html", "Main"),
        ("pacdefence.html", "Pac Defence"),
        ("debug.html", "Pac Defence (debug)"),
    ] {
        let html = fs::read_to_string(output.path().join(page)).expect("read generated page");
        assert_eq!(html.matches("<b>").count(), 1, "{page} should bold one link");
        assert!(
            html.contains(&format!(r#"<li><a href="{page}"><b>{label}</b></a></li>"#)),
            "{page} should bold {label}"
        );
        assert!(html.contains(r#"<li><a href="PacDefence.jar">Download</a></li>"#));
    }
}

#[test]
fn master_head_precedes_part_head() {
    let (output, _) = build_fixture_site();
    let html = fs::read_to_string(output.path().join("pacdefence.html"))
        .expect("read generated page");
    let title = html.find("<title>Pac Defence</title>").expect("master title");
    let meta = html.find(r#"<meta name="description""#).expect("part meta");
    let head_end = html.find("</head>").expect("head close");
    assert!(title < meta && meta < head_end);
    assert!(html.contains(r#"<script src="http://java.com/js/deployJava.js"></script>"#));
}

#[test]
fn applet_pages_launch_with_matching_debug_flag() {
    let site = load_site_config(fixture_dir().join("site.yaml")).expect("load fixture config");
    let (output, _) = build_fixture_site();

    let play = fs::read_to_string(output.path().join("pacdefence.html")).expect("read play page");
    assert!(play.contains(&render_applet_launch(&site.applet, false)));

    let debug = fs::read_to_string(output.path().join("debug.html")).expect("read debug page");
    assert!(debug.contains(&render_applet_launch(&site.applet, true)));

    let index = fs::read_to_string(output.path().join("index.html")).expect("read index page");
    assert!(!index.contains("runApplet"));
}
