//! Page generation and static asset copying.

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};
use sitemark::MarkdownService;
use walkdir::WalkDir;

use crate::config::{is_excluded, SiteConfig};
use crate::{Result, SiteError};

/// Summary of a site build
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Pages written, in walk order
    pub pages: Vec<PathBuf>,
    /// Number of static files copied
    pub static_files: usize,
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| SiteError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| SiteError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn write_page(
    service: &MarkdownService,
    from_path: &Path,
    template: &str,
    dest_path: &Path,
) -> Result<()> {
    info!(
        "generating page from {} to {}",
        from_path.display(),
        dest_path.display()
    );

    let markdown = read(from_path)?;
    let page = service
        .render_page(&markdown, template)
        .map_err(|source| SiteError::Convert {
            path: from_path.to_path_buf(),
            source,
        })?;

    if let Some(parent) = dest_path.parent() {
        create_dir(parent)?;
    }
    fs::write(dest_path, page).map_err(|source| SiteError::Write {
        path: dest_path.to_path_buf(),
        source,
    })
}

/// Convert one Markdown file into an HTML page using a template file
pub fn generate_page(
    service: &MarkdownService,
    from_path: &Path,
    template_path: &Path,
    dest_path: &Path,
) -> Result<()> {
    let template = read(template_path)?;
    write_page(service, from_path, &template, dest_path)
}

/// Convert every `.md` file under `content_dir`, mirroring the directory
/// layout under `dest_dir`. Other files are ignored.
pub fn generate_pages_recursive(
    service: &MarkdownService,
    content_dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
) -> Result<Vec<PathBuf>> {
    let template = read(template_path)?;
    create_dir(dest_dir)?;

    let mut pages = Vec::new();
    for entry in WalkDir::new(content_dir).min_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|source| SiteError::Walk {
            path: content_dir.to_path_buf(),
            source,
        })?;
        let Ok(relative) = entry.path().strip_prefix(content_dir) else {
            continue;
        };
        let dest_path = dest_dir.join(relative);

        if entry.file_type().is_dir() {
            create_dir(&dest_path)?;
        } else if entry.path().extension().is_some_and(|ext| ext == "md") {
            let dest_path = dest_path.with_extension("html");
            write_page(service, entry.path(), &template, &dest_path)?;
            pages.push(dest_path);
        }
    }

    Ok(pages)
}

/// Recursively copy `source` into `dest`, skipping entries whose name is in
/// `exclude` at any depth. Returns the number of files copied.
pub fn copy_static(source: &Path, dest: &Path, exclude: &[String]) -> Result<usize> {
    if !source.exists() {
        warn!("static directory {} does not exist", source.display());
        return Ok(0);
    }

    create_dir(dest)?;

    let walker = WalkDir::new(source)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_excluded(exclude, &entry.file_name().to_string_lossy()));

    let mut copied = 0;
    for entry in walker {
        let entry = entry.map_err(|source_err| SiteError::Walk {
            path: source.to_path_buf(),
            source: source_err,
        })?;
        let Ok(relative) = entry.path().strip_prefix(source) else {
            continue;
        };
        let dest_path = dest.join(relative);

        if entry.file_type().is_dir() {
            create_dir(&dest_path)?;
        } else {
            info!(" * {} -> {}", entry.path().display(), dest_path.display());
            fs::copy(entry.path(), &dest_path).map_err(|source_err| SiteError::Write {
                path: dest_path.clone(),
                source: source_err,
            })?;
            copied += 1;
        }
    }

    Ok(copied)
}

/// Build the whole site: clean the output, copy static assets, generate pages
pub fn build_site(config: &SiteConfig, service: &MarkdownService) -> Result<BuildReport> {
    let output = config.output_dir.as_path();

    if config.clean_output && output.exists() {
        info!("removing {}", output.display());
        fs::remove_dir_all(output).map_err(|source| SiteError::Write {
            path: output.to_path_buf(),
            source,
        })?;
    }
    create_dir(output)?;

    let static_files = copy_static(&config.static_dir, output, &config.exclude)?;
    let pages = generate_pages_recursive(service, &config.content_dir, &config.template, output)?;

    info!(
        "built {} pages and copied {} static files into {}",
        pages.len(),
        static_files,
        output.display()
    );

    Ok(BuildReport {
        pages,
        static_files,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    const TEMPLATE: &str = "<title>{{ Title }}</title><main>{{ Content }}</main>";

    fn write(root: &Path, relative: &str, content: &str) -> PathBuf {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_generate_page() {
        let dir = TempDir::new().unwrap();
        let from = write(dir.path(), "index.md", "# Home\n\nWelcome *friend*");
        let template = write(dir.path(), "template.html", TEMPLATE);
        let dest = dir.path().join("out/nested/index.html");

        generate_page(&MarkdownService::new(), &from, &template, &dest).unwrap();

        assert_eq!(
            fs::read_to_string(dest).unwrap(),
            "<title>Home</title><main><h1>Home</h1><p>Welcome <i>friend</i></p></main>"
        );
    }

    #[test]
    fn test_generate_page_without_title() {
        let dir = TempDir::new().unwrap();
        let from = write(dir.path(), "index.md", "no heading");
        let template = write(dir.path(), "template.html", TEMPLATE);

        let err = generate_page(
            &MarkdownService::new(),
            &from,
            &template,
            &dir.path().join("index.html"),
        )
        .unwrap_err();
        assert!(matches!(err, SiteError::Convert { .. }));
    }

    #[test]
    fn test_generate_page_missing_template() {
        let dir = TempDir::new().unwrap();
        let from = write(dir.path(), "index.md", "# Home");

        let err = generate_page(
            &MarkdownService::new(),
            &from,
            &dir.path().join("missing.html"),
            &dir.path().join("index.html"),
        )
        .unwrap_err();
        assert!(matches!(err, SiteError::Read { .. }));
    }

    #[test]
    fn test_generate_pages_recursive() {
        let dir = TempDir::new().unwrap();
        let content = dir.path().join("content");
        write(&content, "index.md", "# Home");
        write(&content, "blog/first.md", "# First post");
        write(&content, "blog/notes.txt", "not markdown");
        let template = write(dir.path(), "template.html", TEMPLATE);
        let out = dir.path().join("public");

        let pages =
            generate_pages_recursive(&MarkdownService::new(), &content, &template, &out).unwrap();

        assert_eq!(
            pages,
            vec![out.join("blog/first.html"), out.join("index.html")]
        );
        assert_eq!(
            fs::read_to_string(out.join("blog/first.html")).unwrap(),
            "<title>First post</title><main><h1>First post</h1></main>"
        );
        assert!(!out.join("blog/notes.txt").exists());
        assert!(!out.join("blog/notes.html").exists());
    }

    #[test]
    fn test_copy_static() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("static");
        write(&source, "index.css", "body {}");
        write(&source, "images/tolkien.png", "png");
        write(&source, "images/.gitignore", "*");
        write(&source, "content/page.md", "# skip");
        let dest = dir.path().join("public");

        let exclude = vec!["content".to_string(), ".gitignore".to_string()];
        let copied = copy_static(&source, &dest, &exclude).unwrap();

        assert_eq!(copied, 2);
        assert_eq!(fs::read_to_string(dest.join("index.css")).unwrap(), "body {}");
        assert!(dest.join("images/tolkien.png").exists());
        assert!(!dest.join("images/.gitignore").exists());
        assert!(!dest.join("content").exists());
    }

    #[test]
    fn test_copy_static_uses_config_exclusions_at_depth() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("static");
        write(&source, "css/site.css", "body {}");
        write(&source, "css/template.html", "<html>");
        write(&source, "vendor/.git/HEAD", "ref");
        let dest = dir.path().join("public");

        let config = SiteConfig::default();
        assert!(config.is_excluded("template.html"));
        let copied = copy_static(&source, &dest, &config.exclude).unwrap();

        assert_eq!(copied, 1);
        assert!(dest.join("css/site.css").exists());
        assert!(!dest.join("css/template.html").exists());
        assert!(!dest.join("vendor/.git").exists());
    }

    #[test]
    fn test_copy_static_missing_source() {
        let dir = TempDir::new().unwrap();
        let copied = copy_static(&dir.path().join("nope"), &dir.path().join("out"), &[]).unwrap();
        assert_eq!(copied, 0);
    }

    #[test]
    fn test_build_site() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        write(root, "content/index.md", "# Tolkien Fan Club\n\n* Gandalf\n* Bilbo");
        write(root, "static/index.css", "body {}");
        write(root, "template.html", TEMPLATE);
        write(root, "public/stale.html", "old");

        let config = SiteConfig {
            content_dir: root.join("content"),
            static_dir: root.join("static"),
            output_dir: root.join("public"),
            template: root.join("template.html"),
            ..SiteConfig::default()
        };

        let report = build_site(&config, &MarkdownService::new()).unwrap();

        assert_eq!(report.pages, vec![root.join("public/index.html")]);
        assert_eq!(report.static_files, 1);
        assert!(!root.join("public/stale.html").exists());
        assert_eq!(
            fs::read_to_string(root.join("public/index.html")).unwrap(),
            "<title>Tolkien Fan Club</title><main><h1>Tolkien Fan Club</h1><ul><li>Gandalf</li><li>Bilbo</li></ul></main>"
        );
    }
}
