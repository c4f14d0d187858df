use simpledraw_core::{CanvasSnapshot, ExportError, Rgba, Stroke};
use simpledraw_export::{FileWriter, MediaIndex, RecentExports};
use std::sync::Arc;

fn drawing() -> CanvasSnapshot {
    CanvasSnapshot::new(64, 48, Rgba::rgb(240, 240, 240)).with_stroke(
        Stroke::new(Rgba::rgb(20, 40, 200), 5.0).with_points([(4.0, 4.0), (60.0, 44.0)]),
    )
}

#[test]
fn test_png_is_written_and_decodes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("3_P1_Fz.png");

    let written = FileWriter::default().save(&path, &drawing()).unwrap();
    assert!(written.is_absolute());

    let decoded = image::open(&path).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (64, 48));
    assert_eq!(decoded.get_pixel(63, 0).0, [240, 240, 240, 255]);
}

#[test]
fn test_jpeg_is_written_and_decodes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("3_P1_Fz.jpg");

    assert!(FileWriter::default().save_file(&path, &drawing()));

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
    let decoded = image::load_from_memory(&bytes).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (64, 48));
}

#[test]
fn test_svg_never_goes_through_raster_encoder() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vector.svg");

    FileWriter::default().save(&path, &drawing()).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("<?xml"));
    assert!(text.contains("<path d=\"M 4 4 L 60 44\""));
    assert!(image::open(&path).is_err());
}

#[test]
fn test_raster_never_goes_through_vector_serializer() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("raster.png");

    FileWriter::default().save(&path, &drawing()).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert!(!bytes.starts_with(b"<?xml"));
    assert_eq!(&bytes[..4], b"\x89PNG");
}

#[test]
fn test_missing_parent_directory_is_created() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Simple Draw").join("nested").join("out.png");

    assert!(FileWriter::default().save_file(&path, &drawing()));
    assert!(path.is_file());
}

#[test]
fn test_directory_creation_failure_reports_failure() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, b"not a directory").unwrap();
    let path = blocker.join("sub").join("out.png");

    let writer = FileWriter::default();
    let err = writer.save(&path, &drawing()).unwrap_err();
    assert!(matches!(err, ExportError::DirectoryCreation { .. }));
    assert!(!writer.save_file(&path, &drawing()));
}

#[test]
fn test_svg_write_failure_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    // A directory where the file should go makes the write itself fail.
    let path = dir.path().join("taken.svg");
    std::fs::create_dir(&path).unwrap();

    let err = FileWriter::default().save(&path, &drawing()).unwrap_err();
    assert!(matches!(err, ExportError::Write { .. }));
}

#[test]
fn test_media_index_sees_written_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("indexed.svg");
    let index = Arc::new(RecentExports::new(4));

    let writer = FileWriter::new(index.clone());
    let written = writer.save(&path, &drawing()).unwrap();

    assert!(index.contains(&written));
}

struct FailingIndex;

impl MediaIndex for FailingIndex {
    fn scan(&self, _path: &std::path::Path) -> std::io::Result<()> {
        Err(std::io::Error::other("index offline"))
    }
}

#[test]
fn test_media_index_failure_does_not_fail_save() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("still_saved.png");

    let writer = FileWriter::new(Arc::new(FailingIndex));
    assert!(writer.save_file(&path, &drawing()));
    assert!(path.is_file());
}
