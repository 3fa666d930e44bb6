//! QR rendering engine and its one-time lazy load

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, OnceLock};

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use qrcode::bits::Bits;
use qrcode::types::QrError;
use qrcode::{EcLevel, QrCode, Version};
use serde::{Deserialize, Serialize};
use tokio::sync::OnceCell;

use crate::constants::{BRAND_COLOR, LIGHT_FOREGROUND, QR_MARGIN, QR_SIZE};
use crate::svg::SvgWriter;
use crate::{Error, Result};

/// QR error correction level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCorrection {
    Low,
    Medium,
    Quartile,
    #[default]
    High,
}

impl From<ErrorCorrection> for EcLevel {
    fn from(level: ErrorCorrection) -> Self {
        match level {
            ErrorCorrection::Low => EcLevel::L,
            ErrorCorrection::Medium => EcLevel::M,
            ErrorCorrection::Quartile => EcLevel::Q,
            ErrorCorrection::High => EcLevel::H,
        }
    }
}

/// Look of the referral QR code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QrStyle {
    /// Default side length in pixels
    pub size: u32,
    /// Blank border around the modules in pixels
    pub margin: u32,
    pub dark_color: String,
    pub light_color: String,
    pub error_correction: ErrorCorrection,
}

impl Default for QrStyle {
    fn default() -> Self {
        Self {
            size: QR_SIZE,
            margin: QR_MARGIN,
            dark_color: BRAND_COLOR.to_string(),
            light_color: LIGHT_FOREGROUND.to_string(),
            error_correction: ErrorCorrection::High,
        }
    }
}

/// A rendered QR code: module matrix plus its SVG
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QrArtifact {
    /// Encoded payload
    pub data: String,
    /// Side length in pixels, margin included
    pub size: u32,
    pub margin: u32,
    /// Modules per side
    pub module_count: usize,
    /// Side length of one module in pixels
    pub module_size: f64,
    /// Row-major, `true` for dark modules
    modules: Vec<bool>,
    pub svg: String,
}

impl QrArtifact {
    /// Whether the module at column `x`, row `y` is dark; out of range is light
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        if x >= self.module_count || y >= self.module_count {
            return false;
        }
        self.modules.get(y * self.module_count + x).copied().unwrap_or(false)
    }

    pub fn dark_modules(&self) -> usize {
        self.modules.iter().filter(|dark| **dark).count()
    }

    /// `data:` URI for embedding the SVG in an image tag
    pub fn data_uri(&self) -> String {
        format!("data:image/svg+xml;base64,{}", BASE64.encode(self.svg.as_bytes()))
    }
}

/// Something that turns a payload into a QR artifact
pub trait QrEngine: Send + Sync + std::fmt::Debug {
    fn render(&self, data: &str, size: u32, style: &QrStyle) -> Result<QrArtifact>;
}

/// Square-module SVG renderer backed by the `qrcode` crate
#[derive(Debug, Default, Clone, Copy)]
pub struct StyledQrEngine;

impl QrEngine for StyledQrEngine {
    fn render(&self, data: &str, size: u32, style: &QrStyle) -> Result<QrArtifact> {
        let code = byte_mode_code(data, style.error_correction.into())?;

        let module_count = code.width();
        let inner = f64::from(size) - 2.0 * f64::from(style.margin);
        if inner < module_count as f64 {
            return Err(Error::QrRender(format!(
                "{}px leaves less than one pixel per module ({} modules, {}px margin)",
                size, module_count, style.margin
            )));
        }
        let module_size = inner / module_count as f64;

        let modules: Vec<bool> = code
            .to_colors()
            .into_iter()
            .map(|c| c == qrcode::Color::Dark)
            .collect();

        let side = f64::from(size);
        let offset = f64::from(style.margin);
        let mut svg = SvgWriter::new(side, side);
        svg.rect(0.0, 0.0, side, side, &style.light_color);
        for (i, dark) in modules.iter().enumerate() {
            if *dark {
                let x = offset + (i % module_count) as f64 * module_size;
                let y = offset + (i / module_count) as f64 * module_size;
                svg.rect(x, y, module_size, module_size, &style.dark_color);
            }
        }

        Ok(QrArtifact {
            data: data.to_string(),
            size,
            margin: style.margin,
            module_count,
            module_size,
            modules,
            svg: svg.finish(),
        })
    }
}

/// Encode the whole payload as one byte segment in the smallest version that fits
fn byte_mode_code(data: &str, ec: EcLevel) -> Result<QrCode> {
    for number in 1..=40 {
        let mut bits = Bits::new(Version::Normal(number));
        let pushed = bits
            .push_byte_data(data.as_bytes())
            .and_then(|()| bits.push_terminator(ec));
        match pushed {
            Ok(()) => {
                return QrCode::with_bits(bits, ec)
                    .map_err(|e| Error::QrRender(format!("QR generation failed: {}", e)));
            }
            Err(QrError::DataTooLong) => continue,
            Err(e) => return Err(Error::QrRender(format!("QR generation failed: {}", e))),
        }
    }
    Err(Error::QrRender(format!(
        "{} bytes do not fit a version 40 code",
        data.len()
    )))
}

type LoadFuture =Pin<Box<dyn Future<Output = Result<Arc<dyn QrEngine>>> + Send>>;

/// Lazily loaded engine shared by every referral slot.
///
/// The loader runs at most once. A failed load is remembered and reported
/// to every later caller; there is no retry.
pub struct EngineCell {
    engine: OnceCell<std::result::Result<Arc<dyn QrEngine>, String>>,
    loader: Box<dyn Fn() -> LoadFuture + Send + Sync>,
}

impl std::fmt::Debug for EngineCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EngineCell")
            .field("loaded", &self.is_loaded())
            .field("failed", &self.has_failed())
            .finish_non_exhaustive()
    }
}

impl EngineCell {
    pub fn new<F, Fut>(loader: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Arc<dyn QrEngine>>> + Send + 'static,
    {
        Self {
            engine: OnceCell::new(),
            loader: Box::new(move || Box::pin(loader()) as LoadFuture),
        }
    }

    /// Cell that loads the built-in `StyledQrEngine`
    pub fn bundled() -> Self {
        Self::new(|| async { Ok(Arc::new(StyledQrEngine) as Arc<dyn QrEngine>) })
    }

    /// Process-wide bundled cell
    pub fn shared() -> Arc<Self> {
        static SHARED: OnceLock<Arc<EngineCell>> = OnceLock::new();
        SHARED.get_or_init(|| Arc::new(Self::bundled())).clone()
    }

    /// Get the engine, loading it on first use
    pub async fn engine(&self) -> Result<Arc<dyn QrEngine>> {
        let loaded = self
            .engine
            .get_or_init(|| async {
                match (self.loader)().await {
                    Ok(engine) => {
                        tracing::info!("QR engine ready");
                        Ok(engine)
                    }
                    Err(e) => {
                        tracing::warn!("failed to load QR engine: {}", e);
                        Err(match e {
                            Error::EngineUnavailable(msg) => msg,
                            other => other.to_string(),
                        })
                    }
                }
            })
            .await;

        loaded.clone().map_err(Error::EngineUnavailable)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.engine.get(), Some(Ok(_)))
    }

    pub fn has_failed(&self) -> bool {
        matches!(self.engine.get(), Some(Err(_)))
    }
}
