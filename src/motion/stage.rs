use std::fmt::Write;

use super::easing::Easing;

/// Visual properties a stage can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Property {
    Opacity,
    /// Horizontal offset in pixels.
    TranslateX,
    /// Vertical offset in pixels.
    TranslateY,
    Scale,
    /// Width in percent of the parent.
    Width,
}

impl Property {
    /// Value a property has when no stage says otherwise.
    pub fn resting(self) -> f64 {
        match self {
            Property::Opacity | Property::Scale => 1.0,
            Property::TranslateX | Property::TranslateY | Property::Width => 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageName {
    Hidden,
    Visible,
}

impl StageName {
    pub fn opposite(self) -> Self {
        match self {
            StageName::Hidden => StageName::Visible,
            StageName::Visible => StageName::Hidden,
        }
    }
}

impl From<bool> for StageName {
    fn from(visible: bool) -> Self {
        if visible {
            StageName::Visible
        } else {
            StageName::Hidden
        }
    }
}

/// Timing of a stage. All values are milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub duration_ms: f64,
    pub delay_ms: f64,
    /// Added to the delay once per child index.
    pub stagger_ms: f64,
    pub easing: Easing,
}

impl Transition {
    pub const INSTANT: Transition = Transition::tween(0.0);

    pub const fn tween(duration_ms: f64) -> Self {
        Self {
            duration_ms,
            delay_ms: 0.0,
            stagger_ms: 0.0,
            easing: Easing::EaseOut,
        }
    }

    pub const fn delayed(self, delay_ms: f64) -> Self {
        Self { delay_ms, ..self }
    }

    pub const fn staggered(self, stagger_ms: f64) -> Self {
        Self { stagger_ms, ..self }
    }

    pub const fn eased(self, easing: Easing) -> Self {
        Self { easing, ..self }
    }

    /// Start of child `index` relative to the moment the stage is entered.
    pub fn start_offset(&self, index: usize) -> f64 {
        self.delay_ms + index as f64 * self.stagger_ms
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stage {
    pub props: &'static [(Property, f64)],
    pub transition: Transition,
}

impl Stage {
    pub fn value(&self, property: Property) -> Option<f64> {
        self.props
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| *v)
    }

    pub fn start_offset(&self, index: usize) -> f64 {
        self.transition.start_offset(index)
    }
}

/// Immutable mapping from [`StageName`] to the [`Stage`] it shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageDescriptor {
    pub hidden: Stage,
    pub visible: Stage,
}

impl StageDescriptor {
    pub fn stage(&self, name: StageName) -> &Stage {
        match name {
            StageName::Hidden => &self.hidden,
            StageName::Visible => &self.visible,
        }
    }

    /// Inline CSS showing `name` for the child at `index`.
    ///
    /// Properties the target stage does not name fall back to the other stage's
    /// property list with resting values, so a transition always has both ends.
    pub fn style(&self, name: StageName, index: usize) -> String {
        let stage = self.stage(name);
        let other = self.stage(name.opposite());
        let mut values = stage.props.to_vec();
        for (property, _) in other.props {
            if stage.value(*property).is_none() {
                values.push((*property, property.resting()));
            }
        }
        let mut style = render_style(&values);
        let transition = stage.transition;
        if transition.duration_ms > 0.0 {
            let timing = format!(
                "{}ms {} {}ms",
                transition.duration_ms,
                transition.easing.css(),
                stage.start_offset(index)
            );
            let mut parts = Vec::new();
            if values.iter().any(|(p, _)| *p == Property::Opacity) {
                parts.push(format!("opacity {timing}"));
            }
            if values.iter().any(|(p, _)| is_transform(*p)) {
                parts.push(format!("transform {timing}"));
            }
            if values.iter().any(|(p, _)| *p == Property::Width) {
                parts.push(format!("width {timing}"));
            }
            if !parts.is_empty() {
                let _ = write!(style, " transition: {};", parts.join(", "));
            }
        }
        style
    }
}

fn is_transform(property: Property) -> bool {
    matches!(
        property,
        Property::TranslateX | Property::TranslateY | Property::Scale
    )
}

/// Renders property values as inline CSS declarations.
pub fn render_style(values: &[(Property, f64)]) -> String {
    let get = |property: Property| {
        values
            .iter()
            .rev()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| *v)
    };
    let mut style = String::new();
    if let Some(opacity) = get(Property::Opacity) {
        let _ = write!(style, "opacity: {opacity};");
    }
    if values.iter().any(|(p, _)| is_transform(*p)) {
        let x = get(Property::TranslateX).unwrap_or(0.0);
        let y = get(Property::TranslateY).unwrap_or(0.0);
        let scale = get(Property::Scale).unwrap_or(1.0);
        if !style.is_empty() {
            style.push(' ');
        }
        let _ = write!(style, "transform: translate3d({x}px, {y}px, 0) scale({scale});");
    }
    if let Some(width) = get(Property::Width) {
        if !style.is_empty() {
            style.push(' ');
        }
        let _ = write!(style, "width: {width}%;");
    }
    style
}

/// Stage descriptors shared by the page sections.
pub mod presets {
    use super::*;

    const FADE_UP_HIDDEN: &[(Property, f64)] =
        &[(Property::Opacity, 0.0), (Property::TranslateY, 50.0)];
    const SETTLED: &[(Property, f64)] = &[(Property::Opacity, 1.0), (Property::TranslateY, 0.0)];
    const SETTLED_X: &[(Property, f64)] = &[(Property::Opacity, 1.0), (Property::TranslateX, 0.0)];
    const TRANSPARENT: &[(Property, f64)] = &[(Property::Opacity, 0.0)];
    const OPAQUE: &[(Property, f64)] = &[(Property::Opacity, 1.0)];

    const fn hidden(props: &'static [(Property, f64)]) -> Stage {
        Stage {
            props,
            transition: Transition::INSTANT,
        }
    }

    /// Section headings.
    pub static HEADING: StageDescriptor = StageDescriptor {
        hidden: hidden(FADE_UP_HIDDEN),
        visible: Stage {
            props: SETTLED,
            transition: Transition::tween(600.0),
        },
    };

    /// Items rising into place, 200ms apart.
    pub static RISE: StageDescriptor = StageDescriptor {
        hidden: hidden(FADE_UP_HIDDEN),
        visible: Stage {
            props: SETTLED,
            transition: Transition::tween(600.0).staggered(200.0),
        },
    };

    /// Project cards, 100ms apart.
    pub static CARD_RISE: StageDescriptor = StageDescriptor {
        hidden: hidden(FADE_UP_HIDDEN),
        visible: Stage {
            props: SETTLED,
            transition: Transition::tween(600.0).staggered(100.0),
        },
    };

    pub static SLIDE_FROM_LEFT: StageDescriptor = StageDescriptor {
        hidden: hidden(&[(Property::Opacity, 0.0), (Property::TranslateX, -50.0)]),
        visible: Stage {
            props: SETTLED_X,
            transition: Transition::tween(600.0).staggered(200.0),
        },
    };

    pub static SLIDE_FROM_RIGHT: StageDescriptor = StageDescriptor {
        hidden: hidden(&[(Property::Opacity, 0.0), (Property::TranslateX, 50.0)]),
        visible: Stage {
            props: SETTLED_X,
            transition: Transition::tween(600.0).staggered(200.0),
        },
    };

    pub static FADE_IN_SHORT: StageDescriptor = StageDescriptor {
        hidden: hidden(TRANSPARENT),
        visible: Stage {
            props: OPAQUE,
            transition: Transition::tween(300.0).delayed(300.0),
        },
    };

    pub static FADE_IN_LATE: StageDescriptor = StageDescriptor {
        hidden: hidden(TRANSPARENT),
        visible: Stage {
            props: OPAQUE,
            transition: Transition::tween(300.0).delayed(800.0),
        },
    };

    /// Driven by the engine, not by CSS.
    pub static HERO_TITLE: StageDescriptor = StageDescriptor {
        hidden: hidden(&[(Property::Opacity, 0.0), (Property::TranslateY, -50.0)]),
        visible: Stage {
            props: SETTLED,
            transition: Transition::tween(1500.0).eased(Easing::ELASTIC),
        },
    };

    pub static HERO_SUBTITLE: StageDescriptor = StageDescriptor {
        hidden: hidden(&[(Property::Opacity, 0.0), (Property::TranslateY, 20.0)]),
        visible: Stage {
            props: SETTLED,
            transition: Transition::tween(800.0).delayed(500.0),
        },
    };

    pub static HERO_ACTIONS: StageDescriptor = StageDescriptor {
        hidden: hidden(&[(Property::Opacity, 0.0), (Property::TranslateY, 30.0)]),
        visible: Stage {
            props: SETTLED,
            transition: Transition::tween(800.0).delayed(800.0),
        },
    };

    /// Skill bars grow to their own level, so only the timing is shared.
    pub const SKILL_BAR: Transition = Transition::tween(1500.0)
        .eased(Easing::ELASTIC)
        .staggered(100.0);
}

#[cfg(test)]
mod tests {
    use super::presets::*;
    use super::*;

    #[test]
    fn test_stagger_offsets() {
        let stage = RISE.stage(StageName::Visible);
        for index in 0..8 {
            assert_eq!(stage.start_offset(index), index as f64 * 200.0);
        }
        let late = FADE_IN_LATE.stage(StageName::Visible);
        assert_eq!(late.start_offset(0), 800.0);
        assert_eq!(SKILL_BAR.start_offset(3), 300.0);
    }

    #[test]
    fn test_stage_lookup() {
        assert_eq!(
            HEADING.stage(StageName::Hidden).value(Property::TranslateY),
            Some(50.0)
        );
        assert_eq!(
            HEADING.stage(StageName::Visible).value(Property::Opacity),
            Some(1.0)
        );
        assert_eq!(HEADING.stage(StageName::Visible).value(Property::Width), None);
        assert_eq!(StageName::from(true), StageName::Visible);
        assert_eq!(StageName::Visible.opposite(), StageName::Hidden);
    }

    #[test]
    fn test_hidden_style_has_no_transition() {
        let style = RISE.style(StageName::Hidden, 3);
        assert_eq!(
            style,
            "opacity: 0; transform: translate3d(0px, 50px, 0) scale(1);"
        );
    }

    #[test]
    fn test_visible_style_carries_staggered_delay() {
        let style = RISE.style(StageName::Visible, 2);
        assert!(style.starts_with("opacity: 1; transform: translate3d(0px, 0px, 0) scale(1);"));
        assert!(style.contains("opacity 600ms cubic-bezier(0.25, 0.1, 0.25, 1) 400ms"));
        assert!(style.contains("transform 600ms cubic-bezier(0.25, 0.1, 0.25, 1) 400ms"));
    }

    #[test]
    fn test_fade_style_has_no_transform() {
        let style = FADE_IN_SHORT.style(StageName::Visible, 0);
        assert_eq!(
            style,
            "opacity: 1; transition: opacity 300ms cubic-bezier(0.25, 0.1, 0.25, 1) 300ms;"
        );
    }

    #[test]
    fn test_render_style_last_value_wins() {
        let style = render_style(&[
            (Property::Width, 10.0),
            (Property::Width, 85.0),
            (Property::Scale, 1.05),
        ]);
        assert_eq!(
            style,
            "transform: translate3d(0px, 0px, 0) scale(1.05); width: 85%;"
        );
    }
}
