// ABOUTME: Integration tests for batch page building
// ABOUTME: Covers discovery, per-page failure isolation, output naming and helpers end to end

use std::fs;
use std::sync::Arc;

use chrono::{DateTime, Local};
use pagebuilder::template::TemplateError;
use pagebuilder::{PageHelpers, PageStatus, SiteInfo, StandardHelpers, TemplateEngine};

mod common;
use common::TestEnvironment;

#[test]
fn test_empty_input_dir_builds_nothing() {
    let env = TestEnvironment::new();
    env.write_template("readme.txt", "not a template");

    let summary = env.builder().build_all().unwrap();

    assert_eq!(summary.discovered, 0);
    assert_eq!(summary.processed(), 0);
    assert!(!env.output_dir.exists());
}

#[test]
fn test_missing_input_dir_is_created() {
    let env = TestEnvironment::empty();
    assert!(!env.input_dir.exists());

    let summary = env.builder().build_all().unwrap();

    assert_eq!(summary.processed(), 0);
    assert!(env.input_dir.is_dir());
    assert!(env.output_names().is_empty());
}

#[test]
fn test_one_output_per_template() {
    let env = TestEnvironment::new();
    env.write_template("index.hbs", "<h1>{{appName}}</h1>");
    env.write_template("about.hbs", "<p>{{currentPage}}</p>");
    env.write_template("contact.hbs", "<p>{{version}}</p>");

    let summary = env.builder().build_all().unwrap();

    assert_eq!(summary.discovered, 3);
    assert!(summary.is_success());
    assert_eq!(
        env.output_names(),
        vec!["about.html", "contact.html", "index.html"]
    );
    assert_eq!(env.read_output("about.html"), "<p>about.hbs</p>");
}

#[test]
fn test_pages_processed_in_name_order() {
    let env = TestEnvironment::new();
    for name in ["delta.hbs", "alpha.hbs", "charlie.hbs", "bravo.hbs"] {
        env.write_template(name, "{{currentPage}}");
    }

    let summary = env.builder().build_all().unwrap();
    let order: Vec<&str> = summary.pages.iter().map(|p| p.page.as_str()).collect();

    assert_eq!(order, vec!["alpha.hbs", "bravo.hbs", "charlie.hbs", "delta.hbs"]);
}

#[test]
fn test_failed_page_does_not_stop_later_pages() {
    let env = TestEnvironment::new();
    env.write_template("broken.jelly", "<html>{{#if appName}}<p>never closed</html>");
    env.write_template("ok.jelly", "<html>{{appName}}</html>");

    let mut builder = env.builder_with(env.options(".jelly", ".html"), SiteInfo::default());
    let summary = builder.build_all().unwrap();

    assert_eq!(summary.failed_pages(), vec!["broken.jelly"]);
    let broken = summary.outcome("broken.jelly").unwrap();
    assert!(broken.error.as_deref().unwrap().contains("broken.jelly"));

    let ok = summary.outcome("ok.jelly").unwrap();
    assert_eq!(ok.status, PageStatus::Built);
    assert_eq!(env.read_output("ok.html"), "<html>My Page Application</html>");
    assert_eq!(env.output_names(), vec!["ok.html"]);
}

#[test]
fn test_app_name_rendered_from_site_config() {
    let env = TestEnvironment::new();
    env.write_template("home.jelly", "<title>{{appName}} {{version}}</title>");

    let site = SiteInfo {
        app_name: "Fresh Mart".to_string(),
        version: "3.1.4".to_string(),
    };
    let mut builder = env.builder_with(env.options("jelly", "html"), site);
    builder.build_all().unwrap();

    assert_eq!(env.read_output("home.html"), "<title>Fresh Mart 3.1.4</title>");
}

#[test]
fn test_rebuild_is_idempotent_without_timestamps() {
    let env = TestEnvironment::new();
    env.write_template(
        "stable.hbs",
        "{{appName}}|{{version}}|{{currentPage}}|{{osName}}|{{uppercase appName}}",
    );

    env.builder().build_all().unwrap();
    let first = fs::read(env.output_file("stable.html")).unwrap();

    env.builder().build_all().unwrap();
    let second = fs::read(env.output_file("stable.html")).unwrap();

    assert_eq!(first, second);
    assert_eq!(env.output_names(), vec!["stable.html"]);
}

#[test]
fn test_existing_output_is_overwritten() {
    let env = TestEnvironment::new();
    env.write_template("page.hbs", "fresh");
    fs::create_dir_all(&env.output_dir).unwrap();
    fs::write(env.output_file("page.html"), "stale content").unwrap();

    env.builder().build_all().unwrap();

    assert_eq!(env.read_output("page.html"), "fresh");
}

#[test]
fn test_failed_render_leaves_no_partial_file() {
    let env = TestEnvironment::new();
    env.write_template(
        "partial.hbs",
        "<header>{{appName}}</header>{{isEven currentPage}}<footer/>",
    );

    let summary = env.builder().build_all().unwrap();

    assert_eq!(summary.failed(), 1);
    assert!(env.output_names().is_empty());
}

#[test]
fn test_case_helpers_with_absent_values() {
    let env = TestEnvironment::new();
    env.write_template(
        "helpers.hbs",
        "[{{uppercase notDefined}}][{{lowercase notDefined}}][{{uppercase appName}}]",
    );

    env.builder().build_all().unwrap();

    assert_eq!(
        env.read_output("helpers.html"),
        "[][][MY PAGE APPLICATION]"
    );
}

#[test]
fn test_date_helpers_in_pages() {
    let env = TestEnvironment::new();
    env.write_template(
        "dates.hbs",
        "{{formatDate timestamp \"%Y\"}}|{{#if (isEven 10)}}even{{else}}odd{{/if}}|{{currentTime}}",
    );

    env.builder().build_all().unwrap();

    let output = env.read_output("dates.html");
    let parts: Vec<&str> = output.split('|').collect();
    assert_eq!(parts.len(), 3);
    assert_eq!(parts[0].len(), 4);
    assert_eq!(parts[1], "even");
    assert!(!parts[2].is_empty());
}

struct FixedClockHelpers;

impl PageHelpers for FixedClockHelpers {
    fn format_date(&self, date: &DateTime<Local>, pattern: &str) -> Result<String, TemplateError> {
        StandardHelpers.format_date(date, pattern)
    }

    fn uppercase(&self, value: Option<&str>) -> String {
        StandardHelpers.uppercase(value)
    }

    fn lowercase(&self, value: Option<&str>) -> String {
        StandardHelpers.lowercase(value)
    }

    fn is_even(&self, number: i64) -> bool {
        StandardHelpers.is_even(number)
    }

    fn current_time(&self) -> String {
        "Mon Jan 01 00:00:00 +00:00 2024".to_string()
    }
}

#[test]
fn test_custom_helpers_replace_standard_set() {
    let env = TestEnvironment::new();
    env.write_template("clock.hbs", "now: {{currentTime}}");

    let engine = TemplateEngine::with_helpers(Arc::new(FixedClockHelpers));
    let mut builder = env.builder().with_engine(engine);
    builder.build_all().unwrap();

    assert_eq!(
        env.read_output("clock.html"),
        "now: Mon Jan 01 00:00:00 +00:00 2024"
    );
}
