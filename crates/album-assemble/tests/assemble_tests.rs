use std::cell::RefCell;
use std::rc::Rc;

use album_assemble::*;

const EPS: f32 = 0.001;

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba([40, 90, 160, 255]));
    let mut out = std::io::Cursor::new(Vec::new());
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut out, image::ImageFormat::Png)
        .unwrap();
    out.into_inner()
}

fn jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbImage::from_pixel(width, height, image::Rgb([200, 60, 30]));
    let mut out = std::io::Cursor::new(Vec::new());
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut out, image::ImageFormat::Jpeg)
        .unwrap();
    out.into_inner()
}

fn png_slide(name: &str, width: u32, height: u32) -> SlideItem {
    SlideItem::new(name, ImageKind::Png, png_bytes(width, height))
}

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Construct(PageGeometry),
    AddPage(PageGeometry),
    Place {
        format: ImageFormatTag,
        placement: PlacementRect,
    },
    Finish,
}

/// Test double for the encoding collaborator: records the call sequence
/// and optionally fails on the first placed image.
struct RecordingEncoder {
    calls: Rc<RefCell<Vec<Call>>>,
    fail_on_place: bool,
}

impl RecordingEncoder {
    fn new(calls: Rc<RefCell<Vec<Call>>>) -> Self {
        Self {
            calls,
            fail_on_place: false,
        }
    }

    fn failing_on_place(calls: Rc<RefCell<Vec<Call>>>) -> Self {
        Self {
            calls,
            fail_on_place: true,
        }
    }
}

impl DocumentEncoder for RecordingEncoder {
    fn construct_document(&mut self, first_page: &PageGeometry) -> Result<()> {
        self.calls.borrow_mut().push(Call::Construct(*first_page));
        Ok(())
    }

    fn add_page(&mut self, page: &PageGeometry) -> Result<()> {
        self.calls.borrow_mut().push(Call::AddPage(*page));
        Ok(())
    }

    fn place_image(
        &mut self,
        _bytes: &[u8],
        format: ImageFormatTag,
        placement: &PlacementRect,
    ) -> Result<()> {
        if self.fail_on_place {
            return Err(AssembleError::Encode("refused by test double".to_string()));
        }
        self.calls.borrow_mut().push(Call::Place {
            format,
            placement: *placement,
        });
        Ok(())
    }

    fn finish(self) -> Result<Vec<u8>> {
        self.calls.borrow_mut().push(Call::Finish);
        Ok(b"stub document".to_vec())
    }
}

#[test]
fn test_two_image_auto_match_scenario() {
    // 1920x1080 then 1080x1920, auto-match, no padding: two custom-sized
    // pages, landscape then portrait, each filled edge-to-edge.
    let slides = vec![
        png_slide("wide.png", 1920, 1080),
        png_slide("tall.png", 1080, 1920),
    ];
    let options = AssembleOptions::default();

    let calls = Rc::new(RefCell::new(Vec::new()));
    let bytes = assemble_document(
        &slides,
        &options,
        RecordingEncoder::new(calls.clone()),
        |_, _| {},
    )
    .unwrap();
    assert_eq!(bytes, b"stub document");

    let calls = calls.borrow();
    assert_eq!(calls.len(), 5);

    let Call::Construct(first) = &calls[0] else {
        panic!("expected Construct first, got {:?}", calls[0]);
    };
    assert_eq!(first.orientation, Orientation::Landscape);
    assert!((first.width_mm - 1920.0 * PX_TO_MM).abs() < EPS);
    assert!((first.height_mm - 1080.0 * PX_TO_MM).abs() < EPS);

    let Call::Place { placement, .. } = &calls[1] else {
        panic!("expected Place second, got {:?}", calls[1]);
    };
    assert!(placement.x_mm.abs() < EPS);
    assert!(placement.y_mm.abs() < EPS);
    assert!((placement.width_mm - first.width_mm).abs() < EPS);
    assert!((placement.height_mm - first.height_mm).abs() < EPS);

    let Call::AddPage(second) = &calls[2] else {
        panic!("expected AddPage third, got {:?}", calls[2]);
    };
    assert_eq!(second.orientation, Orientation::Portrait);
    assert!((second.width_mm - 1080.0 * PX_TO_MM).abs() < EPS);
    assert!((second.height_mm - 1920.0 * PX_TO_MM).abs() < EPS);

    assert!(matches!(calls[3], Call::Place { .. }));
    assert_eq!(calls[4], Call::Finish);
}

#[test]
fn test_force_portrait_padded_square_scenario() {
    let slides = vec![png_slide("square.png", 1000, 1000)];
    let mut options = AssembleOptions::default();
    options.set_orientation_mode(OrientationMode::ForcePortrait);
    options.set_padding_mm(10.0).unwrap();

    let calls = Rc::new(RefCell::new(Vec::new()));
    assemble_document(
        &slides,
        &options,
        RecordingEncoder::new(calls.clone()),
        |_, _| {},
    )
    .unwrap();

    let calls = calls.borrow();
    let Call::Construct(page) = &calls[0] else {
        panic!("expected Construct first");
    };
    assert_eq!(page.orientation, Orientation::Portrait);
    assert!((page.width_mm - A4_WIDTH_MM).abs() < EPS);
    assert!((page.height_mm - A4_HEIGHT_MM).abs() < EPS);

    let Call::Place { placement, .. } = &calls[1] else {
        panic!("expected Place second");
    };
    // 1:1 aspect preserved, at least 10 mm margin on every side
    assert!((placement.width_mm - placement.height_mm).abs() < EPS);
    assert!(placement.x_mm >= 10.0 - EPS);
    assert!(placement.y_mm >= 10.0 - EPS);
    assert!(placement.right_mm() <= A4_WIDTH_MM - 10.0 + EPS);
    assert!(placement.top_mm() <= A4_HEIGHT_MM - 10.0 + EPS);
}

#[test]
fn test_empty_deck_is_rejected() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let result = assemble_document(
        &[],
        &AssembleOptions::default(),
        RecordingEncoder::new(calls.clone()),
        |_, _| {},
    );

    assert!(matches!(result, Err(AssembleError::EmptyDeck)));
    assert!(calls.borrow().is_empty());
}

#[test]
fn test_invalid_settings_rejected_before_encoding() {
    let slides = vec![png_slide("a.png", 10, 10)];
    let options = AssembleOptions {
        padding_mm: -3.0,
        ..AssembleOptions::default()
    };

    let calls = Rc::new(RefCell::new(Vec::new()));
    let result = assemble_document(
        &slides,
        &options,
        RecordingEncoder::new(calls.clone()),
        |_, _| {},
    );

    assert!(matches!(result, Err(AssembleError::Settings(_))));
    assert!(calls.borrow().is_empty());
}

#[test]
fn test_decode_failure_aborts_remaining_slides() {
    let slides = vec![
        png_slide("good.png", 10, 10),
        SlideItem::new("bad.png", ImageKind::Png, vec![0xde, 0xad, 0xbe, 0xef]),
        png_slide("never.png", 10, 10),
    ];

    let calls = Rc::new(RefCell::new(Vec::new()));
    let mut pages_done = Vec::new();
    let result = assemble_document(
        &slides,
        &AssembleOptions::default(),
        RecordingEncoder::new(calls.clone()),
        |current, total| pages_done.push((current, total)),
    );

    match result {
        Err(AssembleError::Decode { name, .. }) => assert_eq!(name, "bad.png"),
        other => panic!("expected decode failure, got {other:?}"),
    }
    // Only the first slide made it to the encoder; no finish, no document
    let calls = calls.borrow();
    assert_eq!(calls.len(), 2);
    assert!(matches!(calls[0], Call::Construct(_)));
    assert!(matches!(calls[1], Call::Place { .. }));
    assert_eq!(pages_done, vec![(1, 3)]);
}

#[test]
fn test_encode_failure_aborts_batch() {
    let slides = vec![png_slide("a.png", 10, 10), png_slide("b.png", 10, 10)];

    let calls = Rc::new(RefCell::new(Vec::new()));
    let mut pages_done = Vec::new();
    let result = assemble_document(
        &slides,
        &AssembleOptions::default(),
        RecordingEncoder::failing_on_place(calls.clone()),
        |current, total| pages_done.push((current, total)),
    );

    assert!(matches!(result, Err(AssembleError::Encode(_))));
    assert!(pages_done.is_empty());
}

#[test]
fn test_progress_reported_per_slide() {
    let slides = vec![
        png_slide("a.png", 8, 8),
        png_slide("b.png", 8, 8),
        png_slide("c.png", 8, 8),
    ];

    let calls = Rc::new(RefCell::new(Vec::new()));
    let mut pages_done = Vec::new();
    assemble_document(
        &slides,
        &AssembleOptions::default(),
        RecordingEncoder::new(calls),
        |current, total| pages_done.push((current, total)),
    )
    .unwrap();

    assert_eq!(pages_done, vec![(1, 3), (2, 3), (3, 3)]);
}

#[test]
fn test_format_tag_follows_source_kind() {
    let slides = vec![
        png_slide("shot.png", 12, 12),
        SlideItem::new("photo.jpg", ImageKind::Jpeg, jpeg_bytes(12, 12)),
    ];

    let calls = Rc::new(RefCell::new(Vec::new()));
    assemble_document(
        &slides,
        &AssembleOptions::default(),
        RecordingEncoder::new(calls.clone()),
        |_, _| {},
    )
    .unwrap();

    let tags: Vec<ImageFormatTag> = calls
        .borrow()
        .iter()
        .filter_map(|c| match c {
            Call::Place { format, .. } => Some(*format),
            _ => None,
        })
        .collect();
    assert_eq!(tags, vec![ImageFormatTag::Lossless, ImageFormatTag::Photographic]);
}

#[test]
fn test_printpdf_encoder_produces_pdf_bytes() {
    let slides = vec![png_slide("a.png", 32, 16), png_slide("b.png", 16, 32)];

    let bytes = assemble_document(
        &slides,
        &AssembleOptions::default(),
        PrintPdfEncoder::new("album.pdf"),
        |_, _| {},
    )
    .unwrap();

    assert!(bytes.starts_with(b"%PDF"));
    assert!(bytes.len() > 500);
}

#[tokio::test]
async fn test_assemble_to_file_writes_document() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.pdf");
    let slides = vec![png_slide("a.png", 24, 24)];

    let page_count = assemble_to_file(slides, AssembleOptions::default(), &output)
        .await
        .unwrap();

    assert_eq!(page_count, 1);
    let written = std::fs::read(&output).unwrap();
    assert!(written.starts_with(b"%PDF"));
}

#[tokio::test]
async fn test_assemble_to_file_empty_deck_saves_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.pdf");

    let result = assemble_to_file(Vec::new(), AssembleOptions::default(), &output).await;

    assert!(matches!(result, Err(AssembleError::EmptyDeck)));
    assert!(!output.exists());
}
