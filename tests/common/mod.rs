// ABOUTME: Common utilities and helpers for integration tests
// ABOUTME: Provides builders for HTML template documents and temporary template directories

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tokio::fs;

pub struct TestDocumentBuilder {
    title: String,
    elements: Vec<TestElement>,
}

pub struct TestElement {
    pub id: String,
    pub tag: String,
    pub body: String,
}

impl TestDocumentBuilder {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            elements: Vec::new(),
        }
    }

    /// `<template id=..>` whose body is wrapped in the default markers
    pub fn add_template(mut self, id: &str, body: &str) -> Self {
        self.elements.push(TestElement {
            id: id.to_string(),
            tag: "template".to_string(),
            body: format!("<!----{}---->", body),
        });
        self
    }

    /// Hidden `<div id=..>` whose body is wrapped in the default markers
    pub fn add_hidden_div(mut self, id: &str, body: &str) -> Self {
        self.elements.push(TestElement {
            id: id.to_string(),
            tag: "div".to_string(),
            body: format!("<!----{}---->", body),
        });
        self
    }

    /// Element with a body used verbatim
    pub fn add_raw(mut self, tag: &str, id: &str, body: &str) -> Self {
        self.elements.push(TestElement {
            id: id.to_string(),
            tag: tag.to_string(),
            body: body.to_string(),
        });
        self
    }

    pub fn build(&self) -> String {
        let mut html = format!(
            "<!DOCTYPE html>\n<html>\n<head><title>{}</title></head>\n<body>\n",
            self.title
        );

        for element in &self.elements {
            let hidden = if element.tag == "div" { " hidden" } else { "" };
            html.push_str(&format!(
                "<{tag} id=\"{id}\"{hidden}>{body}</{tag}>\n",
                tag = element.tag,
                id = element.id,
                hidden = hidden,
                body = element.body
            ));
        }

        html.push_str("</body>\n</html>\n");
        html
    }

    pub async fn write_to_file(&self, path: &Path) -> std::io::Result<()> {
        fs::write(path, self.build()).await
    }
}

pub struct TestEnvironment {
    pub temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub async fn create_document(&self, name: &str, builder: &TestDocumentBuilder) -> PathBuf {
        let path = self.path().join(format!("{}.html", name));
        builder
            .write_to_file(&path)
            .await
            .expect("Failed to write document");
        path
    }

    /// Write a template file below `templates/`, creating parent directories
    pub async fn create_template_file(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.templates_dir().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .expect("Failed to create template directory");
        }
        fs::write(&path, contents)
            .await
            .expect("Failed to write template file");
        path
    }

    pub fn templates_dir(&self) -> PathBuf {
        self.path().join("templates")
    }

    pub async fn create_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path().join(name);
        fs::write(&path, contents)
            .await
            .expect("Failed to write file");
        path
    }

    pub fn output_file(&self, name: &str) -> PathBuf {
        self.path().join(name)
    }
}

/// Document used across the integration suites
pub fn quiz_document() -> TestDocumentBuilder {
    TestDocumentBuilder::new("Quiz runner")
        .add_template("greeting", "Hello, ${name}!")
        .add_hidden_div(
            "question",
            "<h2>${question.title}</h2><p>Round ${round}</p>",
        )
        .add_template("score-row", "<tr><td>${ player }</td><td>${score}</td></tr>")
        .add_raw("p", "footer", "No markers here")
}
