//! Multipart intake for backup restoration
//!
//! ## Responsibilities
//!
//! - Materialize every file of one multipart request into a single fresh
//!   temporary directory
//! - Preserve original filenames verbatim
//!
//! The directory is allocated once per request, on the first field carrying
//! a filename, and is never cleaned up here: ownership of the materialized
//! archive moves to the restore consumer together with the session. Content,
//! size and MIME validation are the restore handler's responsibility.

use std::path::PathBuf;

use axum::extract::Multipart;

use crate::error::{Error, Result};

/// Prefix identifying restore directories under the temp root
const RESTORE_PREFIX: &str = "camui-restore-";

/// Upload intake, built once at startup and handed to the backup routes.
#[derive(Debug, Clone)]
pub struct RestoreUpload {
    root: PathBuf,
}

/// One file received during an upload session
#[derive(Debug)]
pub struct UploadedFile {
    /// Filename exactly as sent by the client
    pub original_name: String,
    /// Where the file was materialized
    pub stored_path: PathBuf,
}

/// Per-request upload state: one directory, the files written into it.
#[derive(Debug)]
pub struct UploadSession {
    pub directory: PathBuf,
    pub files: Vec<UploadedFile>,
}

impl RestoreUpload {
    /// Intake rooted at the platform temp directory.
    pub fn new() -> Self {
        Self {
            root: std::env::temp_dir(),
        }
    }

    /// Intake rooted elsewhere. Used by tests to observe directory creation.
    pub fn rooted_at(root: PathBuf) -> Self {
        Self { root }
    }

    /// Drain a multipart request into an upload session.
    ///
    /// Fields without a filename are skipped. Requests without any file
    /// field produce no directory and return `Ok(None)`. Filename
    /// collisions within one request overwrite silently.
    pub async fn receive(&self, mut multipart: Multipart) -> Result<Option<UploadSession>> {
        let mut session: Option<UploadSession> = None;

        while let Some(field) = multipart.next_field().await? {
            let Some(name) = field.file_name().map(str::to_owned) else {
                continue;
            };
            let data = field.bytes().await?;

            if session.is_none() {
                session = Some(self.open_session()?);
            }
            let open = session.as_mut().expect("session allocated above");

            let stored_path = open.directory.join(&name);
            tokio::fs::write(&stored_path, &data).await.map_err(|e| {
                tracing::error!(error = %e, file = %name, "Failed to write uploaded file");
                Error::Upload("failed to store uploaded file".to_string())
            })?;

            open.files.push(UploadedFile {
                original_name: name,
                stored_path,
            });
        }

        Ok(session)
    }

    /// Allocate the session directory. Synchronous on purpose: it happens at
    /// most once per request and must be ordered before the first write.
    fn open_session(&self) -> Result<UploadSession> {
        let directory = tempfile::Builder::new()
            .prefix(RESTORE_PREFIX)
            .tempdir_in(&self.root)
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to allocate restore directory");
                Error::Upload("failed to allocate restore directory".to_string())
            })?
            .keep();

        tracing::debug!(directory = %directory.display(), "Restore directory allocated");

        Ok(UploadSession {
            directory,
            files: Vec::new(),
        })
    }
}

impl Default for RestoreUpload {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::extract::FromRequest;
    use http::Request;

    const BOUNDARY: &str = "camui-test-boundary";

    fn multipart_request(parts: &[(&str, Option<&str>, &str)]) -> Request<Body> {
        let mut body = String::new();
        for (field, filename, content) in parts {
            body.push_str(&format!("--{}\r\n", BOUNDARY));
            match filename {
                Some(f) => body.push_str(&format!(
                    "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n\r\n",
                    field, f
                )),
                None => body.push_str(&format!(
                    "Content-Disposition: form-data; name=\"{}\"\r\n\r\n",
                    field
                )),
            }
            body.push_str(content);
            body.push_str("\r\n");
        }
        body.push_str(&format!("--{}--\r\n", BOUNDARY));

        Request::post("/api/backup/restore")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={}", BOUNDARY),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn multipart(parts: &[(&str, Option<&str>, &str)]) -> Multipart {
        Multipart::from_request(multipart_request(parts), &())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn all_files_of_one_request_share_one_directory() {
        let root = tempfile::tempdir().unwrap();
        let intake = RestoreUpload::rooted_at(root.path().to_path_buf());

        let session = intake
            .receive(
                multipart(&[
                    ("file", Some("database.json"), "{\"cameras\":[]}"),
                    ("file", Some("settings.json"), "{}"),
                    ("file", Some("notifications.json"), "[]"),
                ])
                .await,
            )
            .await
            .unwrap()
            .expect("session for request with files");

        let created: Vec<_> = std::fs::read_dir(root.path()).unwrap().collect();
        assert_eq!(created.len(), 1, "exactly one directory per request");

        assert_eq!(session.files.len(), 3);
        for name in ["database.json", "settings.json", "notifications.json"] {
            assert!(
                session.directory.join(name).is_file(),
                "{name} missing from session directory"
            );
        }
    }

    #[tokio::test]
    async fn original_filenames_and_contents_are_preserved() {
        let root = tempfile::tempdir().unwrap();
        let intake = RestoreUpload::rooted_at(root.path().to_path_buf());

        let session = intake
            .receive(multipart(&[("file", Some("Backup File (1).tar"), "tar-bytes")]).await)
            .await
            .unwrap()
            .unwrap();

        let stored = &session.files[0];
        assert_eq!(stored.original_name, "Backup File (1).tar");
        assert_eq!(
            std::fs::read_to_string(&stored.stored_path).unwrap(),
            "tar-bytes"
        );
    }

    #[tokio::test]
    async fn non_file_fields_are_skipped_and_allocate_nothing() {
        let root = tempfile::tempdir().unwrap();
        let intake = RestoreUpload::rooted_at(root.path().to_path_buf());

        let session = intake
            .receive(multipart(&[("note", None, "just a text field")]).await)
            .await
            .unwrap();

        assert!(session.is_none());
        assert_eq!(std::fs::read_dir(root.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn directory_names_carry_the_application_prefix() {
        let root = tempfile::tempdir().unwrap();
        let intake = RestoreUpload::rooted_at(root.path().to_path_buf());

        let session = intake
            .receive(multipart(&[("file", Some("db.json"), "{}")]).await)
            .await
            .unwrap()
            .unwrap();

        let dir_name = session.directory.file_name().unwrap().to_string_lossy();
        assert!(dir_name.starts_with(RESTORE_PREFIX), "got {dir_name}");
    }

    #[tokio::test]
    async fn concurrent_requests_get_distinct_directories() {
        let root = tempfile::tempdir().unwrap();
        let intake = RestoreUpload::rooted_at(root.path().to_path_buf());

        let (a, b) = tokio::join!(
            intake.receive(multipart(&[("file", Some("a.json"), "a")]).await),
            intake.receive(multipart(&[("file", Some("b.json"), "b")]).await),
        );

        let a = a.unwrap().unwrap();
        let b = b.unwrap().unwrap();
        assert_ne!(a.directory, b.directory);
        assert!(a.directory.join("a.json").is_file());
        assert!(b.directory.join("b.json").is_file());
    }

    #[tokio::test]
    async fn allocation_failure_surfaces_as_upload_error() {
        // Point the intake at a root that cannot exist
        let intake = RestoreUpload::rooted_at(PathBuf::from("/nonexistent/upload/root"));

        let err = intake
            .receive(multipart(&[("file", Some("db.json"), "{}")]).await)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Upload(_)), "got {err:?}");
    }
}
