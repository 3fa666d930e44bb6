//! Referral QR lifecycle bound to a visual slot
//!
//! States: uninitialized (engine not loaded) → engine-ready → rendered →
//! torn down. Every rebuild clears the slot before a new artifact is
//! attached, so a slot never holds two artifacts. Teardown also runs on drop.

use std::sync::Arc;

use uuid::Uuid;

use super::engine::{EngineCell, QrArtifact, QrEngine, QrStyle};
use super::link::referral_url;
use crate::{Error, Result};

/// Where a referral QR code is displayed
pub trait VisualSlot {
    /// Show `artifact`; only called on a cleared slot
    fn attach(&mut self, artifact: &QrArtifact);

    /// Remove whatever the slot shows
    fn clear(&mut self);

    /// Neutral stand-in while the engine loads or after it failed to
    fn show_placeholder(&mut self, size: u32);
}

/// In-memory slot holding SVG markup
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SvgSlot {
    content: Option<String>,
}

impl SvgSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_none()
    }
}

impl VisualSlot for SvgSlot {
    fn attach(&mut self, artifact: &QrArtifact) {
        self.content = Some(artifact.svg.clone());
    }

    fn clear(&mut self) {
        self.content = None;
    }

    fn show_placeholder(&mut self, size: u32) {
        self.content = Some(format!(
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="{s}" height="{s}"><rect width="{s}" height="{s}" rx="4" fill="#E5E5E5"/></svg>"##,
            s = size
        ));
    }
}

/// Opaque reference to the artifact currently attached to a slot
#[derive(Debug, Clone, PartialEq)]
pub struct ArtifactHandle {
    id: Uuid,
    artifact: QrArtifact,
}

impl ArtifactHandle {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn artifact(&self) -> &QrArtifact {
        &self.artifact
    }
}

/// Referral link plus the handle of its QR rendering
#[derive(Debug, Clone, PartialEq)]
pub struct ReferralArtifact {
    pub url: String,
    pub code: String,
    pub size: u32,
    pub handle: ArtifactHandle,
}

/// Public view of the builder state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Uninitialized,
    EngineReady,
    Rendered,
    TornDown,
}

enum State {
    Uninitialized,
    EngineReady(Arc<dyn QrEngine>),
    Rendered {
        engine: Arc<dyn QrEngine>,
        artifact: ReferralArtifact,
    },
    TornDown,
}

/// Builds and owns the referral QR code shown in one slot
pub struct ReferralArtifactBuilder<S: VisualSlot> {
    engines: Arc<EngineCell>,
    slot: S,
    base_url: String,
    style: QrStyle,
    state: State,
}

impl<S: VisualSlot> ReferralArtifactBuilder<S> {
    pub fn new(engines: Arc<EngineCell>, slot: S, base_url: impl Into<String>, style: QrStyle) -> Self {
        Self {
            engines,
            slot,
            base_url: base_url.into(),
            style,
            state: State::Uninitialized,
        }
    }

    pub fn phase(&self) -> Phase {
        match self.state {
            State::Uninitialized => Phase::Uninitialized,
            State::EngineReady(_) => Phase::EngineReady,
            State::Rendered { .. } => Phase::Rendered,
            State::TornDown => Phase::TornDown,
        }
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    /// The artifact currently attached, if any
    pub fn artifact(&self) -> Option<&ReferralArtifact> {
        match &self.state {
            State::Rendered { artifact, .. } => Some(artifact),
            _ => None,
        }
    }

    /// Show the QR code for `code` at `size` pixels.
    ///
    /// An unchanged code and size keeps the current artifact. An empty code
    /// clears the slot and yields `None` without loading the engine. Engine
    /// load failures leave a placeholder in the slot and are returned.
    pub async fn update(&mut self, code: &str, size: u32) -> Result<Option<&ReferralArtifact>> {
        if matches!(self.state, State::TornDown) {
            return Err(Error::TornDown);
        }

        let unchanged = matches!(
            &self.state,
            State::Rendered { artifact, .. } if artifact.code == code && artifact.size == size
        );
        if unchanged {
            return Ok(self.artifact());
        }

        self.release();

        let Some(url) = referral_url(&self.base_url, code) else {
            self.slot.clear();
            return Ok(None);
        };

        let ready = match &self.state {
            State::EngineReady(engine) => Some(engine.clone()),
            _ => None,
        };
        let engine = match ready {
            Some(engine) => engine,
            None => {
                self.slot.show_placeholder(size);
                let engine = self.engines.engine().await?;
                tracing::debug!("referral slot engine ready");
                self.state = State::EngineReady(engine.clone());
                engine
            }
        };

        // Drop the placeholder (or anything else) before attaching
        self.slot.clear();
        let qr = engine.render(&url, size, &self.style).map_err(|e| {
            tracing::warn!("failed to create referral QR code: {}", e);
            e
        })?;

        self.slot.attach(&qr);
        let handle = ArtifactHandle {
            id: Uuid::new_v4(),
            artifact: qr,
        };
        tracing::debug!("referral QR {} attached ({}px)", handle.id, size);

        self.state = State::Rendered {
            engine,
            artifact: ReferralArtifact {
                url,
                code: code.to_string(),
                size,
                handle,
            },
        };
        Ok(self.artifact())
    }

    /// Clear the slot and release the handle for good
    pub fn teardown(&mut self) {
        if matches!(self.state, State::TornDown) {
            return;
        }
        self.release();
        self.slot.clear();
        self.state = State::TornDown;
        tracing::debug!("referral slot torn down");
    }

    /// Rendered → engine-ready, detaching the artifact
    fn release(&mut self) {
        let state = std::mem::replace(&mut self.state, State::Uninitialized);
        self.state = match state {
            State::Rendered { engine, artifact } => {
                self.slot.clear();
                tracing::debug!("referral QR {} released", artifact.handle.id);
                State::EngineReady(engine)
            }
            other => other,
        };
    }
}

impl<S: VisualSlot> Drop for ReferralArtifactBuilder<S> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::REFERRAL_BASE_URL;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum SlotEvent {
        Attach(String),
        Clear,
        Placeholder(u32),
    }

    /// Records calls and checks that nothing is attached over a live artifact
    #[derive(Debug, Default, Clone)]
    struct RecordingSlot {
        events: Arc<Mutex<Vec<SlotEvent>>>,
        attached: bool,
    }

    impl RecordingSlot {
        fn events(&self) -> Vec<SlotEvent> {
            self.events.lock().unwrap().clone()
        }
    }

    impl VisualSlot for RecordingSlot {
        fn attach(&mut self, artifact: &QrArtifact) {
            assert!(!self.attached, "attached over a live artifact");
            self.attached = true;
            self.events.lock().unwrap().push(SlotEvent::Attach(artifact.data.clone()));
        }

        fn clear(&mut self) {
            self.attached = false;
            self.events.lock().unwrap().push(SlotEvent::Clear);
        }

        fn show_placeholder(&mut self, size: u32) {
            self.attached = false;
            self.events.lock().unwrap().push(SlotEvent::Placeholder(size));
        }
    }

    fn builder(slot: RecordingSlot) -> ReferralArtifactBuilder<RecordingSlot> {
        ReferralArtifactBuilder::new(
            Arc::new(EngineCell::bundled()),
            slot,
            REFERRAL_BASE_URL,
            QrStyle::default(),
        )
    }

    #[tokio::test]
    async fn test_renders_canonical_url() {
        let slot = RecordingSlot::default();
        let mut builder = builder(slot.clone());
        assert_eq!(builder.phase(), Phase::Uninitialized);

        let artifact = builder.update("ABC123", 180).await.unwrap().unwrap();
        assert_eq!(artifact.url, "https://viajero.akintravel.com/signup?ref=ABC123");
        assert_eq!(artifact.handle.artifact().data, artifact.url);
        assert_eq!(builder.phase(), Phase::Rendered);

        assert_eq!(
            slot.events(),
            vec![
                SlotEvent::Placeholder(180),
                SlotEvent::Clear,
                SlotEvent::Attach("https://viajero.akintravel.com/signup?ref=ABC123".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_empty_code_renders_nothing() {
        let slot = RecordingSlot::default();
        let engines = Arc::new(EngineCell::bundled());
        let mut builder = ReferralArtifactBuilder::new(
            engines.clone(),
            slot.clone(),
            REFERRAL_BASE_URL,
            QrStyle::default(),
        );

        assert!(builder.update("", 180).await.unwrap().is_none());
        assert_eq!(builder.phase(), Phase::Uninitialized);
        assert!(!engines.is_loaded());
        assert!(!slot.events().iter().any(|e| matches!(e, SlotEvent::Attach(_))));
    }

    #[tokio::test]
    async fn test_code_change_replaces_artifact() {
        let slot = RecordingSlot::default();
        let mut builder = builder(slot.clone());

        let first = builder.update("ABC123", 180).await.unwrap().unwrap().handle.id();
        let second = builder.update("XYZ789", 180).await.unwrap().unwrap().handle.id();
        assert_ne!(first, second);

        let events = slot.events();
        let attaches = events.iter().filter(|e| matches!(e, SlotEvent::Attach(_))).count();
        assert_eq!(attaches, 2);
        // Engine was already loaded, so no second placeholder
        assert_eq!(events.iter().filter(|e| matches!(e, SlotEvent::Placeholder(_))).count(), 1);
    }

    #[tokio::test]
    async fn test_size_change_rebuilds_and_same_input_does_not() {
        let slot = RecordingSlot::default();
        let mut builder = builder(slot.clone());

        let first = builder.update("ABC123", 180).await.unwrap().unwrap().handle.id();
        let same = builder.update("ABC123", 180).await.unwrap().unwrap().handle.id();
        assert_eq!(first, same);

        let resized = builder.update("ABC123", 240).await.unwrap().unwrap();
        assert_eq!(resized.size, 240);
        assert_ne!(resized.handle.id(), first);
    }

    #[tokio::test]
    async fn test_clearing_the_code_releases_the_artifact() {
        let slot = RecordingSlot::default();
        let mut builder = builder(slot.clone());

        builder.update("ABC123", 180).await.unwrap();
        assert!(builder.update("", 180).await.unwrap().is_none());
        assert_eq!(builder.phase(), Phase::EngineReady);
        assert!(builder.artifact().is_none());
        assert_eq!(slot.events().last(), Some(&SlotEvent::Clear));
    }

    #[tokio::test]
    async fn test_engine_failure_leaves_placeholder() {
        let slot = RecordingSlot::default();
        let engines = Arc::new(EngineCell::new(|| async {
            Err(Error::EngineUnavailable("chunk load failed".to_string()))
        }));
        let mut builder = ReferralArtifactBuilder::new(
            engines,
            slot.clone(),
            REFERRAL_BASE_URL,
            QrStyle::default(),
        );

        let result = builder.update("ABC123", 180).await;
        assert!(matches!(result, Err(Error::EngineUnavailable(_))));
        assert_eq!(builder.phase(), Phase::Uninitialized);
        assert_eq!(slot.events().last(), Some(&SlotEvent::Placeholder(180)));
    }

    #[tokio::test]
    async fn test_render_failure_leaves_slot_clear() {
        let slot = RecordingSlot::default();
        let mut builder = builder(slot.clone());

        let result = builder.update("ABC123", 20).await;
        assert!(matches!(result, Err(Error::QrRender(_))));
        assert_eq!(builder.phase(), Phase::EngineReady);
        assert_eq!(slot.events().last(), Some(&SlotEvent::Clear));
    }

    #[tokio::test]
    async fn test_teardown_is_final() {
        let slot = RecordingSlot::default();
        let mut builder = builder(slot.clone());

        builder.update("ABC123", 180).await.unwrap();
        builder.teardown();
        assert_eq!(builder.phase(), Phase::TornDown);
        assert!(matches!(builder.update("ABC123", 180).await, Err(Error::TornDown)));
        assert_eq!(slot.events().last(), Some(&SlotEvent::Clear));
    }

    #[tokio::test]
    async fn test_drop_clears_slot() {
        let slot = RecordingSlot::default();
        {
            let mut builder = builder(slot.clone());
            builder.update("ABC123", 180).await.unwrap();
        }
        assert_eq!(slot.events().last(), Some(&SlotEvent::Clear));
    }

    #[tokio::test]
    async fn test_svg_slot_contents() {
        let mut builder = ReferralArtifactBuilder::new(
            Arc::new(EngineCell::bundled()),
            SvgSlot::new(),
            REFERRAL_BASE_URL,
            QrStyle::default(),
        );

        builder.update("ABC123", 180).await.unwrap();
        let svg = builder.slot().content().unwrap().to_string();
        assert_eq!(Some(svg.as_str()), builder.artifact().map(|a| a.handle.artifact().svg.as_str()));

        builder.update("", 180).await.unwrap();
        assert!(builder.slot().is_empty());
    }
}
