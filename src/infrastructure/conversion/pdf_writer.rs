use printpdf::{BuiltinFont, Image, ImageTransform, Mm, PdfDocument};

use crate::application::ports::ConversionError;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 15.0;
const FONT_SIZE_PT: f32 = 11.0;
const LINE_HEIGHT_MM: f32 = 5.0;
/// Helvetica at 11pt fits roughly this many characters between A4 margins.
const WRAP_COLUMNS: usize = 90;
const RENDER_DPI: f32 = 96.0;

/// Typesets plain text onto A4 pages. Lines wrap at a fixed column and
/// overflow onto new pages.
pub fn render_text_pdf(text: &str) -> Result<Vec<u8>, ConversionError> {
    let (doc, page, layer) = PdfDocument::new(
        "Converted document",
        Mm(PAGE_WIDTH_MM as _),
        Mm(PAGE_HEIGHT_MM as _),
        "Layer 1",
    );
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ConversionError::RenderFailed(format!("font load failed: {e}")))?;

    let mut current = doc.get_page(page).get_layer(layer);
    let mut y = PAGE_HEIGHT_MM - MARGIN_MM;

    for line in text.lines().flat_map(wrap_line) {
        if y < MARGIN_MM {
            let (page, layer) = doc.add_page(
                Mm(PAGE_WIDTH_MM as _),
                Mm(PAGE_HEIGHT_MM as _),
                "Layer 1",
            );
            current = doc.get_page(page).get_layer(layer);
            y = PAGE_HEIGHT_MM - MARGIN_MM;
        }
        if !line.is_empty() {
            current.use_text(line, FONT_SIZE_PT as _, Mm(MARGIN_MM as _), Mm(y as _), &font);
        }
        y -= LINE_HEIGHT_MM;
    }

    doc.save_to_bytes()
        .map_err(|e| ConversionError::RenderFailed(format!("pdf serialization failed: {e}")))
}

/// One page per image, the page sized to the image's pixel dimensions at
/// the render DPI so nothing is scaled or cropped.
pub fn render_images_pdf(images: &[(String, Vec<u8>)]) -> Result<Vec<u8>, ConversionError> {
    let Some(((first_name, first_data), rest)) = images.split_first() else {
        return Err(ConversionError::InvalidInput("no images supplied".into()));
    };

    let first = decode_image(first_name, first_data)?;
    let (width_mm, height_mm) = page_size_mm(&first);

    let (doc, page, layer) = PdfDocument::new(
        "Converted images",
        Mm(width_mm as _),
        Mm(height_mm as _),
        "Layer 1",
    );
    place_image(&first, doc.get_page(page).get_layer(layer));

    for (name, data) in rest {
        let decoded = decode_image(name, data)?;
        let (width_mm, height_mm) = page_size_mm(&decoded);
        let (page, layer) = doc.add_page(Mm(width_mm as _), Mm(height_mm as _), "Layer 1");
        place_image(&decoded, doc.get_page(page).get_layer(layer));
    }

    doc.save_to_bytes()
        .map_err(|e| ConversionError::RenderFailed(format!("pdf serialization failed: {e}")))
}

fn decode_image(
    name: &str,
    data: &[u8],
) -> Result<printpdf::image_crate::DynamicImage, ConversionError> {
    printpdf::image_crate::load_from_memory(data)
        .map_err(|e| ConversionError::InvalidInput(format!("cannot decode {name}: {e}")))
}

fn page_size_mm(image: &printpdf::image_crate::DynamicImage) -> (f32, f32) {
    use printpdf::image_crate::GenericImageView;
    let (width_px, height_px) = image.dimensions();
    (px_to_mm(width_px), px_to_mm(height_px))
}

fn px_to_mm(px: u32) -> f32 {
    px as f32 * 25.4 / RENDER_DPI
}

fn place_image(decoded: &printpdf::image_crate::DynamicImage, layer: printpdf::PdfLayerReference) {
    let image = Image::from_dynamic_image(decoded);
    image.add_to_layer(
        layer,
        ImageTransform {
            dpi: Some(RENDER_DPI as _),
            ..Default::default()
        },
    );
}

fn wrap_line(line: &str) -> Vec<String> {
    if line.chars().count() <= WRAP_COLUMNS {
        return vec![line.to_string()];
    }

    let mut wrapped = Vec::new();
    let mut current = String::new();
    let mut columns = 0;

    for word in line.split_whitespace() {
        let word_len = word.chars().count();
        if columns > 0 && columns + 1 + word_len > WRAP_COLUMNS {
            wrapped.push(std::mem::take(&mut current));
            columns = 0;
        }
        if columns > 0 {
            current.push(' ');
            columns += 1;
        }
        current.push_str(word);
        columns += word_len;
    }
    if !current.is_empty() {
        wrapped.push(current);
    }
    if wrapped.is_empty() {
        wrapped.push(String::new());
    }
    wrapped
}
