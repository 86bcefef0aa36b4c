//! The page layout engine.
//!
//! For one slide this decides the page's size and orientation, then
//! computes the scaled, aspect-preserving placement rectangle centered
//! inside the padded content box. Every page is planned independently;
//! the caller handles sequencing.

use crate::options::{AssembleOptions, OrientationMode};
use crate::types::{Orientation, PageGeometry, PixelDimensions, PlacementRect};

/// The layout engine's output for one slide: the page to create and where
/// the image goes on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PagePlan {
    pub geometry: PageGeometry,
    pub placement: PlacementRect,
}

/// Plan one page from the image's natural resolution and the current
/// settings.
pub fn plan_page(dims: PixelDimensions, options: &AssembleOptions) -> PagePlan {
    let (image_w_mm, image_h_mm) = dims.physical_mm();

    let geometry = match options.orientation_mode {
        OrientationMode::ForcePortrait => PageGeometry::standard(Orientation::Portrait),
        OrientationMode::ForceLandscape => PageGeometry::standard(Orientation::Landscape),
        OrientationMode::AutoMatch => PageGeometry::matching(image_w_mm, image_h_mm),
    };

    let placement = fit_centered(image_w_mm, image_h_mm, &geometry, options.padding_mm);

    PagePlan {
        geometry,
        placement,
    }
}

/// Scale the image uniformly to fit the padded content box on both axes,
/// then center it on the page. With zero padding the result touches the
/// page edge on the constrained axis.
fn fit_centered(
    image_w_mm: f32,
    image_h_mm: f32,
    page: &PageGeometry,
    padding_mm: f32,
) -> PlacementRect {
    let ratio = f32::min(
        (page.width_mm - 2.0 * padding_mm) / image_w_mm,
        (page.height_mm - 2.0 * padding_mm) / image_h_mm,
    );

    let final_w = image_w_mm * ratio;
    let final_h = image_h_mm * ratio;

    PlacementRect::new(
        (page.width_mm - final_w) / 2.0,
        (page.height_mm - final_h) / 2.0,
        final_w,
        final_h,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{A4_HEIGHT_MM, A4_WIDTH_MM, PX_TO_MM};

    const EPS: f32 = 0.001;

    fn options(mode: OrientationMode, padding_mm: f32) -> AssembleOptions {
        AssembleOptions {
            orientation_mode: mode,
            padding_mm,
            ..AssembleOptions::default()
        }
    }

    #[test]
    fn auto_match_wide_image_is_landscape() {
        let plan = plan_page(
            PixelDimensions::new(1920, 1080),
            &options(OrientationMode::AutoMatch, 0.0),
        );

        assert_eq!(plan.geometry.orientation, Orientation::Landscape);
        assert!((plan.geometry.width_mm - 1920.0 * PX_TO_MM).abs() < EPS);
        assert!((plan.geometry.height_mm - 1080.0 * PX_TO_MM).abs() < EPS);
    }

    #[test]
    fn auto_match_tall_image_is_portrait() {
        let plan = plan_page(
            PixelDimensions::new(1080, 1920),
            &options(OrientationMode::AutoMatch, 0.0),
        );

        assert_eq!(plan.geometry.orientation, Orientation::Portrait);
    }

    #[test]
    fn auto_match_square_image_is_portrait() {
        // Width must strictly exceed height for landscape
        let plan = plan_page(
            PixelDimensions::new(1000, 1000),
            &options(OrientationMode::AutoMatch, 0.0),
        );

        assert_eq!(plan.geometry.orientation, Orientation::Portrait);
    }

    #[test]
    fn auto_match_zero_padding_fills_page_edge_to_edge() {
        let plan = plan_page(
            PixelDimensions::new(1920, 1080),
            &options(OrientationMode::AutoMatch, 0.0),
        );

        assert!(plan.placement.x_mm.abs() < EPS);
        assert!(plan.placement.y_mm.abs() < EPS);
        assert!((plan.placement.width_mm - plan.geometry.width_mm).abs() < EPS);
        assert!((plan.placement.height_mm - plan.geometry.height_mm).abs() < EPS);
    }

    #[test]
    fn forced_modes_use_standard_page() {
        let portrait = plan_page(
            PixelDimensions::new(800, 600),
            &options(OrientationMode::ForcePortrait, 0.0),
        );
        assert!((portrait.geometry.width_mm - A4_WIDTH_MM).abs() < EPS);
        assert!((portrait.geometry.height_mm - A4_HEIGHT_MM).abs() < EPS);

        let landscape = plan_page(
            PixelDimensions::new(800, 600),
            &options(OrientationMode::ForceLandscape, 0.0),
        );
        assert!((landscape.geometry.width_mm - A4_HEIGHT_MM).abs() < EPS);
        assert!((landscape.geometry.height_mm - A4_WIDTH_MM).abs() < EPS);
    }

    #[test]
    fn zero_padding_touches_constrained_axis_and_centers_other() {
        // Wide image on a portrait A4: width is the constrained axis
        let plan = plan_page(
            PixelDimensions::new(2000, 1000),
            &options(OrientationMode::ForcePortrait, 0.0),
        );

        assert!(plan.placement.x_mm.abs() < EPS);
        assert!((plan.placement.width_mm - A4_WIDTH_MM).abs() < EPS);
        // Centered vertically
        let expected_y = (A4_HEIGHT_MM - plan.placement.height_mm) / 2.0;
        assert!((plan.placement.y_mm - expected_y).abs() < EPS);
        assert!((plan.placement.top_mm() - (A4_HEIGHT_MM - expected_y)).abs() < EPS);
    }

    #[test]
    fn padding_leaves_symmetric_margins_and_preserves_aspect() {
        let plan = plan_page(
            PixelDimensions::new(1000, 1000),
            &options(OrientationMode::ForcePortrait, 10.0),
        );

        // Square image stays square
        assert!((plan.placement.width_mm - plan.placement.height_mm).abs() < EPS);
        // At least 10 mm of margin on all sides
        assert!(plan.placement.x_mm >= 10.0 - EPS);
        assert!(plan.placement.y_mm >= 10.0 - EPS);
        assert!(plan.placement.right_mm() <= A4_WIDTH_MM - 10.0 + EPS);
        assert!(plan.placement.top_mm() <= A4_HEIGHT_MM - 10.0 + EPS);
        // Constrained axis touches the padded box exactly
        assert!((plan.placement.width_mm - (A4_WIDTH_MM - 20.0)).abs() < EPS);
        // Symmetric margins
        assert!((plan.placement.x_mm - (A4_WIDTH_MM - plan.placement.right_mm())).abs() < EPS);
        assert!((plan.placement.y_mm - (A4_HEIGHT_MM - plan.placement.top_mm())).abs() < EPS);
    }

    #[test]
    fn scale_ratio_is_uniform() {
        let dims = PixelDimensions::new(1920, 1080);
        let plan = plan_page(dims, &options(OrientationMode::ForcePortrait, 5.0));

        let (img_w, img_h) = dims.physical_mm();
        let ratio_w = plan.placement.width_mm / img_w;
        let ratio_h = plan.placement.height_mm / img_h;
        assert!((ratio_w - ratio_h).abs() < EPS);
    }
}
