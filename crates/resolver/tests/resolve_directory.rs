use async_trait::async_trait;
use local_media_resolver::{
    BatchPolicy, LocalStore, MediaKind, MediaResolver, MediaStore, ResolveError,
};
use pretty_assertions::assert_eq;
use std::io;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

fn write(dir: &Path, name: &str, bytes: &[u8]) {
    std::fs::write(dir.join(name), bytes).unwrap_or_else(|err| panic!("write {name}: {err}"));
}

/// Local store that refuses to read the listed file names.
struct UnreadableStore {
    unreadable: Vec<&'static str>,
}

#[async_trait]
impl MediaStore for UnreadableStore {
    async fn is_file(&self, path: &Path) -> bool {
        LocalStore.is_file(path).await
    }

    async fn is_dir(&self, path: &Path) -> bool {
        LocalStore.is_dir(path).await
    }

    async fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
        if self.unreadable.contains(&name) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "permission denied",
            ));
        }
        LocalStore.read(path).await
    }

    async fn list_files(&self, dir: &Path) -> io::Result<Vec<String>> {
        LocalStore.list_files(dir).await
    }
}

fn unreadable(names: Vec<&'static str>, policy: BatchPolicy) -> MediaResolver {
    MediaResolver::new(Arc::new(UnreadableStore { unreadable: names })).with_batch_policy(policy)
}

#[tokio::test]
async fn only_table_extensions_are_returned() {
    let temp = TempDir::new().expect("tempdir");
    write(temp.path(), "a.png", b"png-bytes");
    write(temp.path(), "b.txt", b"not media");
    write(temp.path(), "c.jpg", b"jpg-bytes");

    let media = MediaResolver::local()
        .resolve_directory(temp.path(), MediaKind::Image)
        .await
        .expect("resolve dir");

    let summary: Vec<(MediaKind, &str, Vec<u8>)> = media
        .blocks()
        .iter()
        .map(|b| (b.kind, b.mime_type.as_str(), b.decode_data().expect("base64")))
        .collect();
    assert_eq!(
        summary,
        vec![
            (MediaKind::Image, "image/png", b"png-bytes".to_vec()),
            (MediaKind::Image, "image/jpeg", b"jpg-bytes".to_vec()),
        ]
    );
}

#[tokio::test]
async fn blocks_are_ordered_by_file_name() {
    let temp = TempDir::new().expect("tempdir");
    for name in ["zeta.png", "alpha.gif", "mid.webp", "Beta.JPEG"] {
        write(temp.path(), name, name.as_bytes());
    }

    let media = MediaResolver::local()
        .resolve_directory(temp.path(), MediaKind::Image)
        .await
        .expect("resolve dir");

    let payloads: Vec<String> = media
        .blocks()
        .iter()
        .map(|b| String::from_utf8(b.decode_data().expect("base64")).expect("utf8"))
        .collect();
    assert_eq!(payloads, vec!["Beta.JPEG", "alpha.gif", "mid.webp", "zeta.png"]);
    assert_eq!(media.blocks()[0].mime_type, "image/jpeg");
}

#[tokio::test]
async fn audio_files_are_not_images() {
    let temp = TempDir::new().expect("tempdir");
    write(temp.path(), "song.mp3", b"ID3");
    write(temp.path(), "cover.png", b"png");

    let media = MediaResolver::local()
        .resolve_directory(temp.path(), MediaKind::Image)
        .await
        .expect("resolve dir");

    assert_eq!(media.len(), 1);
    assert_eq!(media.blocks()[0].mime_type, "image/png");
}

#[tokio::test]
async fn subdirectories_are_not_descended() {
    let temp = TempDir::new().expect("tempdir");
    let nested = temp.path().join("nested");
    std::fs::create_dir(&nested).expect("mkdir nested");
    write(&nested, "deep.png", b"deep");

    let err = MediaResolver::local()
        .resolve_directory(temp.path(), MediaKind::Image)
        .await
        .expect_err("nothing at top level");
    assert!(matches!(err, ResolveError::EmptyResult { .. }), "{err:?}");
}

#[tokio::test]
async fn directory_without_images_is_empty_result() {
    let temp = TempDir::new().expect("tempdir");
    write(temp.path(), "notes.txt", b"hi");
    write(temp.path(), "README", b"hi");

    let err = MediaResolver::local()
        .resolve_directory(temp.path(), MediaKind::Image)
        .await
        .expect_err("no images");
    match &err {
        ResolveError::EmptyResult { dir } => assert_eq!(dir, temp.path()),
        other => panic!("expected EmptyResult, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_directory_is_not_found() {
    let temp = TempDir::new().expect("tempdir");
    let dir = temp.path().join("images");

    let err = MediaResolver::local()
        .resolve_directory(&dir, MediaKind::Image)
        .await
        .expect_err("no dir");
    match &err {
        ResolveError::NotFound { path } => assert_eq!(path, &dir),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn abort_policy_fails_the_batch_on_unreadable_file() {
    let temp = TempDir::new().expect("tempdir");
    write(temp.path(), "a.png", b"a");
    write(temp.path(), "b.png", b"b");

    let err = unreadable(vec!["b.png"], BatchPolicy::Abort)
        .resolve_directory(temp.path(), MediaKind::Image)
        .await
        .expect_err("b.png is unreadable");
    match &err {
        ResolveError::Io { path, source } => {
            assert_eq!(path, &temp.path().join("b.png"));
            assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
        }
        other => panic!("expected Io, got {other:?}"),
    }
}

#[tokio::test]
async fn skip_policy_keeps_readable_files() {
    let temp = TempDir::new().expect("tempdir");
    write(temp.path(), "a.png", b"a");
    write(temp.path(), "b.png", b"b");
    write(temp.path(), "c.png", b"c");

    let media = unreadable(vec!["b.png"], BatchPolicy::Skip)
        .resolve_directory(temp.path(), MediaKind::Image)
        .await
        .expect("a and c are readable");

    let payloads: Vec<Vec<u8>> = media
        .blocks()
        .iter()
        .map(|b| b.decode_data().expect("base64"))
        .collect();
    assert_eq!(payloads, vec![b"a".to_vec(), b"c".to_vec()]);
}

#[tokio::test]
async fn skip_policy_with_nothing_readable_is_empty_result() {
    let temp = TempDir::new().expect("tempdir");
    write(temp.path(), "a.png", b"a");

    let err = unreadable(vec!["a.png"], BatchPolicy::Skip)
        .resolve_directory(temp.path(), MediaKind::Image)
        .await
        .expect_err("nothing readable");
    assert!(matches!(err, ResolveError::EmptyResult { .. }), "{err:?}");
}
