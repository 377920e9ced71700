use super::api::ApiClient;
use super::{FeedData, FeedFetcher};
use crate::error::FetchError;
use async_trait::async_trait;
use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl PixelColor {
    pub fn to_ratatui_color(self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

/// A volunteer photo scaled down to terminal cells. Rows are pixel rows;
/// the popup draws two of them per line with half blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelData {
    pub pixels: Vec<Vec<PixelColor>>,
    pub width: u32,
    pub height: u32,
}

pub fn thumb_path(volunteer_id: u64) -> String {
    format!("thumb/{}", volunteer_id)
}

pub struct ThumbFetcher {
    api: ApiClient,
    volunteer_id: u64,
    target_size: u32,
}

impl ThumbFetcher {
    pub fn new(api: ApiClient, volunteer_id: u64, target_size: u32) -> Self {
        Self {
            api,
            volunteer_id,
            target_size,
        }
    }
}

#[async_trait]
impl FeedFetcher for ThumbFetcher {
    async fn fetch(&self) -> Result<FeedData, FetchError> {
        let (url, bytes) = self.api.get_bytes(&thumb_path(self.volunteer_id)).await?;
        let image = decode_thumbnail(&bytes, self.target_size)
            .map_err(|source| FetchError::Image { url, source })?;
        Ok(FeedData::Thumbnail {
            volunteer_id: self.volunteer_id,
            image,
        })
    }
}

/// Decode and shrink to fit a `target_size` square, keeping the aspect
/// ratio.
pub fn decode_thumbnail(bytes: &[u8], target_size: u32) -> Result<PixelData, image::ImageError> {
    let img = image::load_from_memory(bytes)?;

    let (original_width, original_height) = (img.width().max(1), img.height().max(1));
    let target_size = target_size.max(1);

    let (new_width, new_height) = if original_width > original_height {
        let ratio = original_height as f64 / original_width as f64;
        (target_size, ((target_size as f64 * ratio) as u32).max(1))
    } else {
        let ratio = original_width as f64 / original_height as f64;
        (((target_size as f64 * ratio) as u32).max(1), target_size)
    };

    let resized = img.resize_exact(
        new_width,
        new_height,
        image::imageops::FilterType::Nearest,
    );
    let rgb_img = resized.to_rgb8();

    let pixels = (0..new_height)
        .map(|y| {
            (0..new_width)
                .map(|x| {
                    let pixel = rgb_img.get_pixel(x, y);
                    PixelColor {
                        r: pixel[0],
                        g: pixel[1],
                        b: pixel[2],
                    }
                })
                .collect()
        })
        .collect();

    Ok(PixelData {
        pixels,
        width: new_width,
        height: new_height,
    })
}
