use std::fs::OpenOptions;
use std::path::Path;

/// Makes sure the file behind a `sqlite://` url exists, since sqlx will not
/// create it unless the url asks for `mode=rwc`. Other urls are left alone.
pub fn create_dev_db(db_url: &str) -> std::io::Result<()> {
    let Some(path) = sqlite_path(db_url) else {
        return Ok(());
    };

    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    OpenOptions::new().create(true).append(true).open(path)?;
    Ok(())
}

fn sqlite_path(db_url: &str) -> Option<&str> {
    let rest = db_url
        .strip_prefix("sqlite://")
        .or_else(|| db_url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or_default();

    if path.is_empty() || path.starts_with(":memory:") {
        None
    } else {
        Some(path)
    }
}
