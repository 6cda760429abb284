use arraylist::Transition;

/// Which way an item slides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlideDirection {
    In,
    Out,
}

/// Eased progress of an item's enter or exit transition.
///
/// The engine only tracks *that* an item is entering or exiting. Hosts that animate a slide
/// offset sample this every frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slide {
    pub direction: SlideDirection,
    pub start_ms: u64,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Slide {
    pub fn new(direction: SlideDirection, start_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            direction,
            start_ms,
            duration_ms: duration_ms.max(1),
            easing,
        }
    }

    /// The slide for an item in `transition` since `since_ms`; `None` when settled.
    pub fn for_transition(
        transition: Transition,
        since_ms: u64,
        duration_ms: u64,
        easing: Easing,
    ) -> Option<Self> {
        let direction = match transition {
            Transition::Entering => SlideDirection::In,
            Transition::Exiting => SlideDirection::Out,
            Transition::Settled => return None,
        };
        Some(Self::new(direction, since_ms, duration_ms, easing))
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    /// Eased completion in `[0, 1]`.
    pub fn progress(&self, now_ms: u64) -> f32 {
        let elapsed = now_ms.saturating_sub(self.start_ms);
        let t = (elapsed as f32 / self.duration_ms as f32).clamp(0.0, 1.0);
        self.easing.sample(t)
    }

    /// How much of the item is shown: rises `0 → 1` when sliding in, falls `1 → 0` when out.
    pub fn visible_fraction(&self, now_ms: u64) -> f32 {
        let p = self.progress(now_ms);
        match self.direction {
            SlideDirection::In => p,
            SlideDirection::Out => 1.0 - p,
        }
    }

    /// Horizontal displacement for an item `width` wide; 0 means fully in place.
    pub fn offset(&self, now_ms: u64, width: f32) -> f32 {
        (1.0 - self.visible_fraction(now_ms)) * width
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    SmoothStep,
    #[default]
    EaseInOutCubic,
}

impl Easing {
    pub fn sample(self, t: f32) -> f32 {
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
        }
    }
}
