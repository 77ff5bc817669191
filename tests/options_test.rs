use std::path::{Path, PathBuf};
use stencil::config::{Config, SearchAndReplaceItem, TemplateConfig};
use stencil::error::Error;
use stencil::options::{
    merge_options, normalize_options, normalize_path, resolve_options, TemplateOptions,
};

fn options_with_paths() -> TemplateOptions {
    TemplateOptions {
        dir_path: Some(PathBuf::from("/some/path/to/dir")),
        template_path: Some(PathBuf::from("/another/path/to/template")),
        hooks_path: Some(PathBuf::from("/yet/another/path/to/hooks")),
        config_dir: Some(PathBuf::from("/config/dir")),
        ..TemplateOptions::default()
    }
}

#[test]
fn test_normalize_path_collapses_segments() {
    assert_eq!(normalize_path(Path::new("a/b/../c")), PathBuf::from("a/c"));
    assert_eq!(normalize_path(Path::new("./a/./b")), PathBuf::from("a/b"));
    assert_eq!(normalize_path(Path::new("/..")), PathBuf::from("/"));
    assert_eq!(normalize_path(Path::new("../a")), PathBuf::from("../a"));
    assert_eq!(normalize_path(Path::new(".")), PathBuf::from("."));
}

#[test]
fn test_normalize_reanchors_absolute_paths_outside_config_folder() {
    let mut options = options_with_paths();
    normalize_options(&mut options, Path::new("/base/folder"));

    assert_eq!(
        options.dir_path,
        Some(PathBuf::from("/base/folder/some/path/to/dir"))
    );
    assert_eq!(
        options.template_path,
        Some(PathBuf::from("/base/folder/another/path/to/template"))
    );
    assert_eq!(
        options.hooks_path,
        Some(PathBuf::from("/base/folder/yet/another/path/to/hooks"))
    );
    assert_eq!(options.config_dir, Some(PathBuf::from("/base/folder/config/dir")));
}

#[test]
fn test_normalize_keeps_absolute_paths_under_config_folder() {
    let mut options = TemplateOptions {
        dir_path: Some(PathBuf::from("/base/folder/absolute/path")),
        ..TemplateOptions::default()
    };
    normalize_options(&mut options, Path::new("/base/folder"));

    assert_eq!(options.dir_path, Some(PathBuf::from("/base/folder/absolute/path")));
}

#[test]
fn test_normalize_keeps_relative_paths() {
    let mut options = TemplateOptions {
        dir_path: Some(PathBuf::from("some/relative/dir")),
        ..TemplateOptions::default()
    };
    normalize_options(&mut options, Path::new("/base/folder"));

    assert_eq!(options.dir_path, Some(PathBuf::from("some/relative/dir")));
}

#[test]
fn test_normalize_leaves_absent_fields_untouched() {
    let mut options = TemplateOptions::default();
    normalize_options(&mut options, Path::new("/base/folder"));

    assert_eq!(options, TemplateOptions::default());
}

#[test]
fn test_normalize_without_config_folder_only_canonicalizes() {
    let mut options = TemplateOptions {
        dir_path: Some(PathBuf::from("/abs/./path")),
        ..TemplateOptions::default()
    };
    normalize_options(&mut options, Path::new(""));

    assert_eq!(options.dir_path, Some(PathBuf::from("/abs/path")));
}

#[test]
fn test_normalize_touches_only_inject_file_replace_values() {
    let mut options = TemplateOptions {
        search_and_replace: Some(vec![
            SearchAndReplaceItem {
                search: "A".to_string(),
                replace: "/snippets/header.txt".to_string(),
                inject_file: true,
                ..SearchAndReplaceItem::default()
            },
            SearchAndReplaceItem {
                search: "B".to_string(),
                replace: "/not/a/path".to_string(),
                ..SearchAndReplaceItem::default()
            },
        ]),
        ..TemplateOptions::default()
    };
    normalize_options(&mut options, Path::new("/base"));

    let items = options.search_and_replace.unwrap();
    assert_eq!(items[0].replace, "/base/snippets/header.txt");
    assert_eq!(items[1].replace, "/not/a/path");
}

#[test]
fn test_merge_prefers_override_values() {
    let overrides = TemplateOptions {
        file_name: Some("widget".to_string()),
        should_replace_file_content: Some(false),
        ..TemplateOptions::default()
    };
    let base = TemplateOptions {
        file_name: Some("base-name".to_string()),
        dir_path: Some(PathBuf::from("./out")),
        should_replace_file_content: Some(true),
        ..TemplateOptions::default()
    };

    let merged = merge_options(&overrides, &base);
    assert_eq!(merged.file_name, Some("widget".to_string()));
    assert_eq!(merged.dir_path, Some(PathBuf::from("./out")));
    assert_eq!(merged.should_replace_file_content, Some(false));
}

fn config_with(template: TemplateConfig) -> Config {
    Config {
        default_template_name: template.name.clone(),
        templates: vec![template],
        folder: PathBuf::from("/project"),
        path: PathBuf::from("/project/stencil.config.json"),
        ..Config::default()
    }
}

fn component_template() -> TemplateConfig {
    TemplateConfig {
        name: "component".to_string(),
        description: None,
        options: TemplateOptions {
            template_path: Some(PathBuf::from("/project/.stencil/component")),
            dir_path: Some(PathBuf::from("./{fileName}")),
            file_name_text_to_be_replaced: Some("component".to_string()),
            text_to_be_replaced: Some("FileName;AUTHOR".to_string()),
            replace_text_with: Some("{fileName};someone".to_string()),
            ..TemplateOptions::default()
        },
    }
}

#[test]
fn test_resolve_options_interpolates_file_name() {
    let config = config_with(component_template());
    let template = &config.templates[0];

    let options =
        resolve_options(&TemplateOptions::default(), template, "my-widget", &config).unwrap();

    assert_eq!(options.dir_path, PathBuf::from("./my-widget"));
    assert_eq!(options.file_name, "my-widget");
    // pair items are interpolated before splitting
    assert_eq!(options.search_and_replace[0].search, "FileName");
    assert_eq!(options.search_and_replace[0].replace, "my-widget");
    assert_eq!(options.search_and_replace[1].replace, "someone");
}

#[test]
fn test_resolve_options_applies_defaults() {
    let config = config_with(component_template());
    let template = &config.templates[0];

    let options =
        resolve_options(&TemplateOptions::default(), template, "widget", &config).unwrap();

    assert!(options.should_replace_file_content);
    assert!(options.should_replace_file_name);
    assert_eq!(options.file_name_text_to_be_replaced, "component");
    assert_eq!(options.config_dir, Some(PathBuf::from("/project")));
    assert!(options.if_statements.is_empty());
}

#[test]
fn test_resolve_options_cli_overrides_template() {
    let config = config_with(component_template());
    let template = &config.templates[0];
    let overrides = TemplateOptions {
        dir_path: Some(PathBuf::from("./elsewhere")),
        should_replace_file_name: Some(false),
        ..TemplateOptions::default()
    };

    let options = resolve_options(&overrides, template, "widget", &config).unwrap();

    assert_eq!(options.dir_path, PathBuf::from("./elsewhere"));
    assert!(!options.should_replace_file_name);
}

#[test]
fn test_resolve_options_rejects_pair_length_mismatch() {
    let config = config_with(TemplateConfig {
        options: TemplateOptions {
            text_to_be_replaced: Some("A;B".to_string()),
            replace_text_with: Some("only".to_string()),
            ..component_template().options
        },
        ..component_template()
    });
    let template = &config.templates[0];

    let result = resolve_options(&TemplateOptions::default(), template, "widget", &config);
    assert!(matches!(result, Err(Error::ReplacePairMismatchError { .. })));
}

#[test]
fn test_resolve_options_requires_template_path() {
    let config = config_with(TemplateConfig {
        name: "empty".to_string(),
        description: None,
        options: TemplateOptions::default(),
    });
    let template = &config.templates[0];

    let result = resolve_options(&TemplateOptions::default(), template, "widget", &config);
    assert!(matches!(result, Err(Error::ConfigError(_))));
}
