//! Gamut checks and gamut mapping.
//! <https://drafts.csswg.org/css-color-4/#gamut-mapping>

use tracing::trace;

use crate::color::{Color, Component, Components};
use crate::convert::convert;
use crate::coord::{resolve_coordinate, CoordRef};
use crate::delta_e::{delta_e_2000, delta_e_ok};
use crate::error::Result;
use crate::registry::{self, SpaceRef};
use crate::space::{ColorSpace, CoordKind};
use crate::spaces::xyz::D65;
use crate::spaces::{OKLAB, OKLCH, XYZ_D65};

/// The tolerance used for gamut checks unless another one is given. It
/// absorbs the drift of repeated matrix transforms.
pub const DEFAULT_EPSILON: Component = 0.000075;

/// Returns true if `components` in `space` are inside its gamut, allowing
/// values up to `epsilon` past either end of a range.
///
/// Spaces that check their gamut through another space, like the polar
/// spaces, convert the components there first. Angles, coordinates without
/// a range and `NaN` components always pass.
pub fn in_gamut(
    space: &'static ColorSpace,
    components: Components,
    epsilon: Component,
) -> Result<bool> {
    let gamut_space = space.gamut_space();
    if gamut_space != space {
        let components = convert(space, gamut_space, components)?;
        return in_gamut(gamut_space, components, epsilon);
    }

    let coords = space.coords();
    Ok(components.all(|i, value| match coords[i].range {
        Some((min, max)) if coords[i].kind != CoordKind::Angle && !value.is_nan() => {
            value >= min - epsilon && value <= max + epsilon
        }
        _ => true,
    }))
}

/// Clamp each component of `space` that has a range into that range.
/// NOTE: This is a lossy operation.
pub fn clip(space: &ColorSpace, components: Components) -> Components {
    let coords = space.coords();
    components.map_indexed(|i, value| match coords[i].range {
        Some((min, max)) => value.clamp(min, max),
        None => value,
    })
}

impl ColorSpace {
    /// Returns true if `components` in this space are inside its gamut. See
    /// [`in_gamut`].
    pub fn in_gamut(&'static self, components: Components, epsilon: Component) -> Result<bool> {
        in_gamut(self, components, epsilon)
    }
}

/// How [`Color::to_gamut`] brings a color into gamut.
#[derive(Clone, Copy, Debug)]
pub enum GamutMethod {
    /// Clamp every component into range.
    Clip,
    /// The CSS Color 4 binary search over OKLCh chroma.
    Css,
    /// Reduce one coordinate, usually a chroma, until the color clips with a
    /// difference below the JND.
    Reduce(CoordRef<'static>),
}

impl Default for GamutMethod {
    fn default() -> Self {
        Self::Reduce(CoordRef::from("lch.c"))
    }
}

/// The color difference used by [`GamutMethod::Reduce`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeltaE {
    /// CIEDE2000.
    #[default]
    E2000,
    /// Euclidean distance in Oklab.
    Ok,
}

impl DeltaE {
    /// The difference between two colors.
    pub fn distance(self, reference: &Color, sample: &Color) -> Result<Component> {
        match self {
            Self::E2000 => delta_e_2000(reference, sample),
            Self::Ok => delta_e_ok(reference, sample),
        }
    }
}

/// Snap colors to media white or black once one of their coordinates
/// reaches a bound, instead of reducing them.
#[derive(Clone, Copy, Debug)]
pub struct BlackWhiteClamp {
    /// The coordinate to check. Relative references name a coordinate of
    /// the target space.
    pub channel: CoordRef<'static>,
    /// At or below this value the color becomes black.
    pub min: Component,
    /// At or above this value the color becomes white.
    pub max: Component,
}

/// Options for [`Color::to_gamut`].
#[derive(Clone, Copy, Debug)]
pub struct GamutOptions {
    /// How to bring the color into gamut.
    pub method: GamutMethod,
    /// The space whose gamut to map into. `None` maps into the color's own
    /// space.
    pub space: Option<&'static ColorSpace>,
    /// The just noticeable difference, in units of `delta_e`.
    pub jnd: Component,
    /// The color difference to compare against `jnd`.
    pub delta_e: DeltaE,
    /// Only used by [`GamutMethod::Reduce`].
    pub black_white_clamp: Option<BlackWhiteClamp>,
}

impl Default for GamutOptions {
    fn default() -> Self {
        Self {
            method: GamutMethod::default(),
            space: None,
            jnd: 2.0,
            delta_e: DeltaE::default(),
            black_white_clamp: None,
        }
    }
}

/// The bisection stops once its bounds are two orders of magnitude closer
/// than the JND.
fn bisection_epsilon(jnd: Component) -> Component {
    let order = if jnd == 0.0 {
        0.0
    } else {
        jnd.abs().log10().floor()
    };
    Component::powf(10.0, order - 2.0).max(1.0e-6)
}

/// Clamp the components of a color in its own space.
fn clip_color(color: &Color) -> Color {
    color.with_components(color.space, clip(color.space, color.components_or_nan()))
}

/// The color converted to `space` and clipped there.
fn clip_to(color: &Color, space: &'static ColorSpace) -> Result<Color> {
    Ok(clip_color(&color.to_space(space)?))
}

/// The color clipped to the gamut of `space`, in its own space. A color
/// already in gamut is returned as is.
fn clip_within(color: &Color, space: &'static ColorSpace) -> Result<Color> {
    if color.in_gamut_of(space, 0.0)? {
        return Ok(*color);
    }
    clip_to(color, space)?.to_space(color.space)
}

/// Reduce one coordinate of `origin` until its clip into `target` is less
/// than a JND away. Returns the result in `target`.
fn map_reduce(
    origin: &Color,
    target: &'static ColorSpace,
    coord: CoordRef<'static>,
    options: &GamutOptions,
) -> Result<Color> {
    let jnd = if options.jnd == 0.0 { 1.0e-16 } else { options.jnd };

    // If the plain clip is close enough, there is no point in searching.
    let clipped = clip_to(origin, target)?;
    let delta = options.delta_e.distance(origin, &clipped)?;
    if delta <= jnd {
        trace!(delta, jnd, "clipped color is within the JND");
        return Ok(clipped);
    }

    if let Some(clamp) = options.black_white_clamp {
        let channel = resolve_coordinate(clamp.channel, Some(target))?;
        let value = origin.get(channel)?.unwrap_or(0.0);

        if value >= clamp.max {
            trace!(value, max = clamp.max, "snapped to white");
            return Color::new(&XYZ_D65, D65.0, D65.1, D65.2, origin.alpha()).to_space(target);
        }
        if value <= clamp.min {
            trace!(value, min = clamp.min, "snapped to black");
            return Color::new(&XYZ_D65, 0.0, 0.0, 0.0, origin.alpha()).to_space(target);
        }
    }

    let coord = resolve_coordinate(coord, Some(target))?;
    let mut mapped = origin.to_space(coord.space)?;
    mapped = mapped.with_components(mapped.space, mapped.resolved_components());

    let epsilon = bisection_epsilon(jnd);
    let mut low = coord.meta.min().unwrap_or(0.0);
    let mut high = mapped.components[coord.index];
    let mut steps = 0;

    while high - low > epsilon {
        let clipped = clip_within(&mapped, target)?;
        let delta = options.delta_e.distance(&mapped, &clipped)?;

        if delta - jnd < epsilon {
            low = mapped.components[coord.index];
        } else {
            high = mapped.components[coord.index];
        }

        mapped.components[coord.index] = (low + high) / 2.0;
        steps += 1;
    }

    trace!(
        steps,
        space = coord.space.id(),
        coord = coord.id,
        value = mapped.components[coord.index],
        "reduced coordinate into gamut"
    );

    mapped.to_space(target)
}

/// The CSS Color 4 gamut mapping algorithm. Returns the result in `target`.
/// <https://drafts.csswg.org/css-color-4/#binsearch>
fn map_css(origin: &Color, target: &'static ColorSpace) -> Result<Color> {
    // A destination without gamut limits holds the origin as is.
    if target.is_unbounded() {
        return origin.to_space(target);
    }

    let origin_oklch = origin.to_space(&OKLCH)?;
    let lightness = origin_oklch.resolved_components().0;

    // Anything at or past the lightness of white is white, anything at or
    // below black is black.
    if lightness >= 1.0 {
        return Color::new(&OKLAB, 1.0, 0.0, 0.0, origin.alpha()).to_space(target);
    }
    if lightness <= 0.0 {
        return Color::new(&OKLAB, 0.0, 0.0, 0.0, origin.alpha()).to_space(target);
    }

    if origin_oklch.in_gamut_of(target, 0.0)? {
        return origin_oklch.to_space(target);
    }

    const JND: Component = 0.02;
    const EPSILON: Component = 1.0e-4;

    let mut min = 0.0;
    let mut max = origin_oklch.components.1;
    let mut min_in_gamut = true;

    let mut current = origin_oklch;
    let mut clipped = clip_to(&current, target)?;

    // The clipped color might already be close enough to skip the search.
    if delta_e_ok(&clipped, &current)? < JND {
        return Ok(clipped);
    }

    let mut steps = 0;
    while max - min > EPSILON {
        steps += 1;

        let chroma = (min + max) / 2.0;
        current.components.1 = chroma;

        // While the lower bound is in gamut, chroma can move up without
        // clipping.
        if min_in_gamut && current.in_gamut_of(target, 0.0)? {
            min = chroma;
            continue;
        }

        clipped = clip_to(&current, target)?;
        let e = delta_e_ok(&clipped, &current)?;

        if e < JND {
            // Close enough to the edge of the JND.
            if JND - e < EPSILON {
                break;
            }
            min_in_gamut = false;
            min = chroma;
        } else {
            max = chroma;
        }
    }

    trace!(steps, chroma = current.components.1, "css gamut search finished");

    Ok(clipped)
}

impl Color {
    /// Returns true if the color is inside the gamut of its own space, with
    /// the [`DEFAULT_EPSILON`] tolerance.
    pub fn in_gamut(&self) -> Result<bool> {
        in_gamut(self.space, self.components_or_nan(), DEFAULT_EPSILON)
    }

    /// Returns true if the color is inside the gamut of `space` with the
    /// given tolerance.
    pub fn in_gamut_of<'a>(
        &self,
        space: impl Into<SpaceRef<'a>>,
        epsilon: Component,
    ) -> Result<bool> {
        let space = registry::get(space)?;
        in_gamut(space, self.coords_in(space)?, epsilon)
    }

    /// Map the color into the gamut of `options.space`, or of its own space
    /// if none is given. The result stays in the color's own space and keeps
    /// its alpha. A color that is already in gamut is returned unchanged.
    pub fn to_gamut(&self, options: &GamutOptions) -> Result<Self> {
        let target = options.space.unwrap_or(self.space);

        if self.in_gamut_of(target, 0.0)? {
            return Ok(*self);
        }

        trace!(
            method = ?options.method,
            from = self.space.id(),
            target = target.id(),
            "mapping color into gamut"
        );

        let mapped = match options.method {
            GamutMethod::Css => map_css(self, target)?,
            GamutMethod::Clip => clip_to(self, target)?,
            GamutMethod::Reduce(_) if self.in_gamut_of(target, DEFAULT_EPSILON)? => {
                self.to_space(target)?
            }
            GamutMethod::Reduce(coord) => map_reduce(self, target, coord, options)?,
        };

        // Remove whatever overshoot is left.
        let mapped = if mapped.in_gamut_of(target, 0.0)? {
            mapped
        } else {
            clip_color(&mapped)
        };

        Ok(self.with_components(self.space, mapped.coords_in(self.space)?))
    }

    /// Map the color into gamut, replacing its components. See
    /// [`Color::to_gamut`].
    pub fn to_gamut_in_place(&mut self, options: &GamutOptions) -> Result<()> {
        *self = self.to_gamut(options)?;
        Ok(())
    }

    /// Convert the color into `space` and map it into gamut there.
    pub fn to_space_in_gamut<'a>(
        &self,
        space: impl Into<SpaceRef<'a>>,
        options: &GamutOptions,
    ) -> Result<Self> {
        self.to_space(space)?.to_gamut(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::spaces::{HSL, LAB, LCH, P3, SRGB, XYZ_D65};
    use crate::test::assert_components_near;

    /// A Display P3 color converted to sRGB without any mapping.
    fn p3_in_srgb(r: Component, g: Component, b: Component) -> Color {
        Color::new(&P3, r, g, b, 1.0).to_space(&SRGB).unwrap()
    }

    fn with_method(method: GamutMethod) -> GamutOptions {
        GamutOptions {
            method,
            ..Default::default()
        }
    }

    #[test]
    fn unbounded_spaces_hold_everything() {
        assert!(in_gamut(&LAB, Components(1000.0, 1000.0, 1000.0), 0.0).unwrap());
        assert!(in_gamut(&XYZ_D65, Components(-5.0, 2.0, 9.0), 0.0).unwrap());
        assert!(in_gamut(&OKLCH, Components(2.0, 5.0, 400.0), 0.0).unwrap());
    }

    #[test]
    fn range_boundaries() {
        assert!(SRGB.in_gamut(Components(0.0, 1.0, 0.5), 0.0).unwrap());

        let half = DEFAULT_EPSILON / 2.0;
        assert!(SRGB.in_gamut(Components(1.0 + half, -half, 0.5), DEFAULT_EPSILON).unwrap());
        assert!(!SRGB.in_gamut(Components(1.0 + half, 0.5, 0.5), 0.0).unwrap());
        assert!(!SRGB.in_gamut(Components(1.001, 0.5, 0.5), DEFAULT_EPSILON).unwrap());

        // Missing components are never out of range.
        assert!(SRGB.in_gamut(Components(Component::NAN, 0.5, 0.5), 0.0).unwrap());
    }

    #[test]
    fn polar_spaces_check_through_base() {
        assert!(Color::new(&HSL, 0.0, 100.0, 50.0, 1.0).in_gamut().unwrap());
        assert!(!Color::new(&HSL, 0.0, 101.0, 50.0, 1.0).in_gamut().unwrap());

        let p3_red = Color::new(&P3, 1.0, 0.0, 0.0, 1.0);
        assert!(p3_red.in_gamut().unwrap());
        assert!(!p3_red.in_gamut_of("hsl", DEFAULT_EPSILON).unwrap());
        assert!(!p3_red.in_gamut_of(&SRGB, DEFAULT_EPSILON).unwrap());
    }

    #[test]
    fn clip_only_touches_ranges() {
        assert_eq!(
            clip(&SRGB, Components(1.2, -0.1, 0.5)),
            Components(1.0, 0.0, 0.5)
        );
        assert_eq!(
            clip(&HSL, Components(400.0, 120.0, -5.0)),
            Components(400.0, 100.0, 0.0)
        );
        assert_eq!(
            clip(&LCH, Components(50.0, 200.0, 400.0)),
            Components(50.0, 200.0, 400.0)
        );
    }

    #[test]
    fn bisection_epsilon_follows_jnd() {
        approx::assert_abs_diff_eq!(bisection_epsilon(2.0), 0.01, epsilon = 1.0e-12);
        approx::assert_abs_diff_eq!(bisection_epsilon(0.02), 0.0001, epsilon = 1.0e-12);
        assert_eq!(bisection_epsilon(1.0e-16), 1.0e-6);
    }

    #[test]
    fn in_gamut_colors_are_unchanged() {
        let c = Color::new(&SRGB, 0.2, 0.4, None, 0.5);
        assert_eq!(c.to_gamut(&GamutOptions::default()).unwrap(), c);
        assert_eq!(c.to_gamut(&with_method(GamutMethod::Css)).unwrap(), c);
    }

    #[test]
    fn reduce_chroma_of_p3_primaries() {
        let cases = [
            ([1.0, 0.0, 0.0], [0.98227, 0.21804, 0.0]),
            ([0.0, 1.0, 0.0], [0.0, 0.99797, 0.0]),
            ([0.0, 0.0, 1.0], [0.0, 0.0, 1.0]),
            ([1.0, 1.0, 0.0], [1.0, 0.99455, 0.0]),
            ([0.0, 1.0, 1.0], [0.0, 1.0, 0.98933]),
            ([1.0, 0.0, 1.0], [1.0, 0.08564, 0.98223]),
        ];

        for ([r, g, b], expected) in cases {
            let source = p3_in_srgb(r, g, b);
            let mapped = source.to_gamut(&GamutOptions::default()).unwrap();
            assert_eq!(mapped.space, &SRGB);
            assert_components_near!(mapped.components, expected, 1.0e-3);
            assert!(SRGB.in_gamut(mapped.components, 0.0).unwrap());
        }
    }

    #[test]
    fn reduced_color_is_closer_than_the_clip() {
        let source = p3_in_srgb(1.0, 0.0, 0.0);
        let mapped = source.to_gamut(&GamutOptions::default()).unwrap();
        let clipped = source.to_gamut(&with_method(GamutMethod::Clip)).unwrap();

        assert_components_near!(clipped.components, [1.0, 0.0, 0.0], 1.0e-9);

        let mapped_delta = delta_e_2000(&source, &mapped).unwrap();
        let clipped_delta = delta_e_2000(&source, &clipped).unwrap();
        approx::assert_abs_diff_eq!(mapped_delta, 6.167, epsilon = 1.0e-2);
        approx::assert_abs_diff_eq!(clipped_delta, 7.116, epsilon = 1.0e-2);
        assert!(mapped_delta <= clipped_delta);
    }

    #[test]
    fn reduce_another_coordinate() {
        let source = p3_in_srgb(0.0, 1.0, 0.0);
        let mapped = source
            .to_gamut(&with_method(GamutMethod::Reduce("hsl.s".into())))
            .unwrap();
        assert_components_near!(mapped.components, [0.0, 0.75290, 0.0], 1.0e-3);
    }

    #[test]
    fn zero_jnd_still_terminates() {
        let source = p3_in_srgb(1.0, 0.0, 0.0);
        let options = GamutOptions {
            jnd: 0.0,
            ..Default::default()
        };
        let mapped = source.to_gamut(&options).unwrap();
        assert_components_near!(mapped.components, [0.95115, 0.27051, 0.0], 1.0e-3);
    }

    #[test]
    fn black_white_clamp_snaps_past_the_bounds() {
        let clamp = |min, max| GamutOptions {
            black_white_clamp: Some(BlackWhiteClamp {
                channel: "oklch.l".into(),
                min,
                max,
            }),
            ..Default::default()
        };

        let light = Color::new(&OKLCH, 0.97, 0.2, 100.0, 0.5).to_space(&SRGB).unwrap();
        let reduced = light.to_gamut(&GamutOptions::default()).unwrap();
        assert_components_near!(reduced.components, [1.0, 0.96810, 0.77072], 1.0e-3);
        let white = light.to_gamut(&clamp(0.05, 0.95)).unwrap();
        assert_components_near!(white.components, [1.0, 1.0, 1.0], 1.0e-6);
        assert!(SRGB.in_gamut(white.components, 0.0).unwrap());
        assert_eq!(white.alpha(), Some(0.5));

        let dark = Color::new(&OKLCH, -0.02, 0.2, 300.0, 1.0).to_space(&SRGB).unwrap();
        let reduced = dark.to_gamut(&GamutOptions::default()).unwrap();
        assert_components_near!(reduced.components, [0.0, 0.0, 0.03280], 1.0e-3);
        let black = dark.to_gamut(&clamp(0.0, 1.0)).unwrap();
        assert_components_near!(black.components, [0.0, 0.0, 0.0], 1.0e-9);

        // Inside the bounds the clamp changes nothing.
        let red = p3_in_srgb(1.0, 0.0, 0.0);
        assert_eq!(
            red.to_gamut(&clamp(0.0, 1.0)).unwrap(),
            red.to_gamut(&GamutOptions::default()).unwrap()
        );
    }

    #[test]
    fn reduce_a_resolved_coordinate() {
        let chroma = resolve_coordinate("lch.c", None).unwrap();
        let source = p3_in_srgb(1.0, 0.0, 0.0);
        assert_eq!(
            source.to_gamut(&with_method(GamutMethod::Reduce(chroma.into()))).unwrap(),
            source.to_gamut(&GamutOptions::default()).unwrap()
        );
    }

    #[test]
    fn map_into_another_space() {
        let p3_red = Color::new(&P3, 1.0, 0.0, 0.0, 0.5);
        let options = GamutOptions {
            space: Some(&SRGB),
            ..Default::default()
        };
        let mapped = p3_red.to_gamut(&options).unwrap();
        assert_eq!(mapped.space, &P3);
        assert_eq!(mapped.alpha(), Some(0.5));
        assert_components_near!(mapped.components, [0.90463, 0.29251, 0.14833], 1.0e-3);
        assert!(mapped.in_gamut_of(&SRGB, DEFAULT_EPSILON).unwrap());

        let in_srgb = p3_red
            .to_space_in_gamut(&SRGB, &GamutOptions::default())
            .unwrap();
        assert_eq!(in_srgb.space, &SRGB);
        assert_components_near!(in_srgb.components, [0.98227, 0.21804, 0.0], 1.0e-3);
    }

    #[test]
    fn css_method() {
        let cases = [
            ([1.0, 0.0, 0.0], [1.0, 0.04457, 0.04593]),
            ([0.0, 1.0, 0.0], [0.0, 0.98576, 0.15974]),
            ([1.0, 1.0, 0.0], [0.99623, 0.99901, 0.0]),
            ([0.0, 1.0, 1.0], [0.0, 0.99645, 0.98471]),
            ([1.0, 0.0, 1.0], [1.0, 0.16736, 0.98264]),
        ];

        let options = with_method(GamutMethod::Css);
        for ([r, g, b], expected) in cases {
            let mapped = p3_in_srgb(r, g, b).to_gamut(&options).unwrap();
            assert_components_near!(mapped.components, expected, 1.0e-3);
            assert!(SRGB.in_gamut(mapped.components, 0.0).unwrap());
        }
    }

    #[test]
    fn css_method_past_white_and_black() {
        let options = GamutOptions {
            method: GamutMethod::Css,
            space: Some(&SRGB),
            ..Default::default()
        };

        let white = Color::new(&P3, 2.0, 0.0, 1.0, 0.25).to_gamut(&options).unwrap();
        assert_components_near!(white.components, [1.0, 1.0, 1.0], 1.0e-5);
        assert_eq!(white.alpha(), Some(0.25));

        let black = Color::new(&P3, -1.0, 0.0, 0.0, 1.0).to_gamut(&options).unwrap();
        assert_components_near!(black.components, [0.0, 0.0, 0.0], 1.0e-5);
    }

    #[test]
    fn css_method_clamps_colors_lighter_than_white() {
        let options = with_method(GamutMethod::Css);
        let light = Color::new(&OKLCH, 1.1, 0.1, 40.0, 1.0);

        let srgb = light.to_space(&SRGB).unwrap().to_gamut(&options).unwrap();
        assert!(SRGB.in_gamut(srgb.components, 0.0).unwrap());
        assert_components_near!(srgb.components, [1.0, 1.0, 1.0], 1.0e-6);
        assert_eq!(srgb.to_gamut(&options).unwrap(), srgb);

        let hsl = light.to_space(&HSL).unwrap().to_gamut(&options).unwrap();
        assert!(hsl.in_gamut_of(&HSL, 0.0).unwrap());
        approx::assert_abs_diff_eq!(hsl.components.1, 100.0, epsilon = 1.0e-6);
        approx::assert_abs_diff_eq!(hsl.components.2, 100.0, epsilon = 1.0e-6);
        assert_eq!(hsl.to_gamut(&options).unwrap(), hsl);
    }

    #[test]
    fn css_method_into_unbounded_space() {
        let options = GamutOptions {
            method: GamutMethod::Css,
            space: Some(&LAB),
            ..Default::default()
        };
        let c = Color::new(&P3, 2.0, -1.0, 0.5, 1.0);
        assert_eq!(c.to_gamut(&options).unwrap(), c);
    }

    #[test]
    fn mapping_is_idempotent() {
        let methods = [
            GamutMethod::default(),
            GamutMethod::Clip,
            GamutMethod::Css,
            GamutMethod::Reduce("oklch.c".into()),
        ];

        for method in methods {
            let options = with_method(method);
            for [r, g, b] in [[1.0, 0.0, 0.0], [0.0, 1.0, 1.0], [1.0, 0.0, 1.0]] {
                let once = p3_in_srgb(r, g, b).to_gamut(&options).unwrap();
                let twice = once.to_gamut(&options).unwrap();
                assert_eq!(once, twice, "{method:?}");
            }
        }
    }

    #[test]
    fn map_in_place() {
        let mut c = p3_in_srgb(1.0, 0.0, 0.0);
        c.to_gamut_in_place(&with_method(GamutMethod::Clip)).unwrap();
        assert_components_near!(c.components, [1.0, 0.0, 0.0], 1.0e-9);
    }

    #[test]
    fn unknown_reduction_coordinate() {
        let source = p3_in_srgb(1.0, 0.0, 0.0);
        let options = with_method(GamutMethod::Reduce("bogus.c".into()));
        assert_eq!(
            source.to_gamut(&options),
            Err(Error::UnknownSpace("bogus".to_string()))
        );
    }
}
