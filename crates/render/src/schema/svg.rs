use super::{Definition, Kind, Space};

use Kind::{Boolean, CommaOrSpaceSeparated, CommaSeparated, Number, Plain, SpaceSeparated};

/// Properties whose attribute name differs from the property name.
const RENAMED: &[(&str, &str, Kind)] = &[
    ("accentHeight", "accent-height", Number),
    ("alignmentBaseline", "alignment-baseline", Plain),
    ("arabicForm", "arabic-form", Plain),
    ("baselineShift", "baseline-shift", Plain),
    ("capHeight", "cap-height", Number),
    ("className", "class", SpaceSeparated),
    ("clipPath", "clip-path", Plain),
    ("clipRule", "clip-rule", Plain),
    ("colorInterpolation", "color-interpolation", Plain),
    ("colorInterpolationFilters", "color-interpolation-filters", Plain),
    ("colorProfile", "color-profile", Plain),
    ("colorRendering", "color-rendering", Plain),
    ("crossOrigin", "crossorigin", Plain),
    ("dataType", "datatype", Plain),
    ("dominantBaseline", "dominant-baseline", Plain),
    ("enableBackground", "enable-background", Plain),
    ("fillOpacity", "fill-opacity", Number),
    ("fillRule", "fill-rule", Plain),
    ("floodColor", "flood-color", Plain),
    ("floodOpacity", "flood-opacity", Plain),
    ("fontFamily", "font-family", Plain),
    ("fontSize", "font-size", Plain),
    ("fontSizeAdjust", "font-size-adjust", Plain),
    ("fontStretch", "font-stretch", Plain),
    ("fontStyle", "font-style", Plain),
    ("fontVariant", "font-variant", Plain),
    ("fontWeight", "font-weight", Plain),
    ("glyphName", "glyph-name", CommaSeparated),
    ("glyphOrientationHorizontal", "glyph-orientation-horizontal", Plain),
    ("glyphOrientationVertical", "glyph-orientation-vertical", Plain),
    ("hrefLang", "hreflang", Plain),
    ("horizAdvX", "horiz-adv-x", Number),
    ("horizOriginX", "horiz-origin-x", Number),
    ("horizOriginY", "horiz-origin-y", Number),
    ("imageRendering", "image-rendering", Plain),
    ("letterSpacing", "letter-spacing", Plain),
    ("lightingColor", "lighting-color", Plain),
    ("markerEnd", "marker-end", Plain),
    ("markerMid", "marker-mid", Plain),
    ("markerStart", "marker-start", Plain),
    ("navDown", "nav-down", Plain),
    ("navDownLeft", "nav-down-left", Plain),
    ("navDownRight", "nav-down-right", Plain),
    ("navLeft", "nav-left", Plain),
    ("navNext", "nav-next", Plain),
    ("navPrev", "nav-prev", Plain),
    ("navRight", "nav-right", Plain),
    ("navUp", "nav-up", Plain),
    ("navUpLeft", "nav-up-left", Plain),
    ("navUpRight", "nav-up-right", Plain),
    ("overlinePosition", "overline-position", Number),
    ("overlineThickness", "overline-thickness", Number),
    ("paintOrder", "paint-order", Plain),
    ("panose1", "panose-1", Plain),
    ("pointerEvents", "pointer-events", Plain),
    ("referrerPolicy", "referrerpolicy", Plain),
    ("renderingIntent", "rendering-intent", Plain),
    ("shapeRendering", "shape-rendering", Plain),
    ("stopColor", "stop-color", Plain),
    ("stopOpacity", "stop-opacity", Plain),
    ("strikethroughPosition", "strikethrough-position", Number),
    ("strikethroughThickness", "strikethrough-thickness", Number),
    ("strokeDashArray", "stroke-dasharray", CommaOrSpaceSeparated),
    ("strokeDashOffset", "stroke-dashoffset", Plain),
    ("strokeLineCap", "stroke-linecap", Plain),
    ("strokeLineJoin", "stroke-linejoin", Plain),
    ("strokeMiterLimit", "stroke-miterlimit", Number),
    ("strokeOpacity", "stroke-opacity", Number),
    ("strokeWidth", "stroke-width", Plain),
    ("tabIndex", "tabindex", Number),
    ("textAnchor", "text-anchor", Plain),
    ("textDecoration", "text-decoration", Plain),
    ("textRendering", "text-rendering", Plain),
    ("typeOf", "typeof", CommaOrSpaceSeparated),
    ("underlinePosition", "underline-position", Number),
    ("underlineThickness", "underline-thickness", Number),
    ("unicodeBidi", "unicode-bidi", Plain),
    ("unicodeRange", "unicode-range", Plain),
    ("unitsPerEm", "units-per-em", Number),
    ("vAlphabetic", "v-alphabetic", Number),
    ("vHanging", "v-hanging", Number),
    ("vIdeographic", "v-ideographic", Number),
    ("vMathematical", "v-mathematical", Number),
    ("vectorEffect", "vector-effect", Plain),
    ("vertAdvY", "vert-adv-y", Number),
    ("vertOriginX", "vert-origin-x", Number),
    ("vertOriginY", "vert-origin-y", Number),
    ("wordSpacing", "word-spacing", Plain),
    ("writingMode", "writing-mode", Plain),
    ("xHeight", "x-height", Number),
];

/// Properties spelled the same as their attribute.
const VERBATIM: &[(&str, Kind)] = &[
    ("about", CommaOrSpaceSeparated),
    ("accumulate", Plain),
    ("additive", Plain),
    ("alphabetic", Number),
    ("amplitude", Number),
    ("ascent", Number),
    ("attributeName", Plain),
    ("attributeType", Plain),
    ("azimuth", Number),
    ("bandwidth", Plain),
    ("baseFrequency", Plain),
    ("baseProfile", Plain),
    ("bbox", Plain),
    ("begin", Plain),
    ("bias", Number),
    ("by", Plain),
    ("calcMode", Plain),
    ("clip", Plain),
    ("clipPathUnits", Plain),
    ("color", Plain),
    ("content", Plain),
    ("contentScriptType", Plain),
    ("contentStyleType", Plain),
    ("cursor", Plain),
    ("cx", Plain),
    ("cy", Plain),
    ("d", Plain),
    ("defaultAction", Plain),
    ("descent", Number),
    ("diffuseConstant", Number),
    ("direction", Plain),
    ("display", Plain),
    ("dur", Plain),
    ("divisor", Number),
    ("download", Boolean),
    ("dx", Plain),
    ("dy", Plain),
    ("edgeMode", Plain),
    ("editable", Plain),
    ("elevation", Number),
    ("end", Plain),
    ("event", Plain),
    ("exponent", Number),
    ("externalResourcesRequired", Plain),
    ("fill", Plain),
    ("filter", Plain),
    ("filterRes", Plain),
    ("filterUnits", Plain),
    ("focusable", Plain),
    ("focusHighlight", Plain),
    ("format", Plain),
    ("fr", Plain),
    ("from", Plain),
    ("fx", Plain),
    ("fy", Plain),
    ("g1", CommaSeparated),
    ("g2", CommaSeparated),
    ("glyphRef", Plain),
    ("gradientTransform", Plain),
    ("gradientUnits", Plain),
    ("handler", Plain),
    ("hanging", Number),
    ("hatchContentUnits", Plain),
    ("hatchUnits", Plain),
    ("height", Plain),
    ("href", Plain),
    ("id", Plain),
    ("ideographic", Number),
    ("in", Plain),
    ("in2", Plain),
    ("initialVisibility", Plain),
    ("intercept", Number),
    ("k", Number),
    ("k1", Number),
    ("k2", Number),
    ("k3", Number),
    ("k4", Number),
    ("kernelMatrix", CommaOrSpaceSeparated),
    ("kernelUnitLength", Plain),
    ("keyPoints", Plain),
    ("keySplines", Plain),
    ("keyTimes", Plain),
    ("kerning", Plain),
    ("lang", Plain),
    ("lengthAdjust", Plain),
    ("limitingConeAngle", Number),
    ("local", Plain),
    ("markerHeight", Plain),
    ("markerUnits", Plain),
    ("markerWidth", Plain),
    ("mask", Plain),
    ("maskContentUnits", Plain),
    ("maskUnits", Plain),
    ("mathematical", Plain),
    ("max", Plain),
    ("media", Plain),
    ("mediaCharacterEncoding", Plain),
    ("mediaContentEncodings", Plain),
    ("mediaSize", Number),
    ("mediaTime", Plain),
    ("method", Plain),
    ("min", Plain),
    ("mode", Plain),
    ("name", Plain),
    ("numOctaves", Plain),
    ("observer", Plain),
    ("offset", Plain),
    ("opacity", Plain),
    ("operator", Plain),
    ("order", Plain),
    ("orient", Plain),
    ("orientation", Plain),
    ("origin", Plain),
    ("overflow", Plain),
    ("overlay", Plain),
    ("path", Plain),
    ("pathLength", Number),
    ("patternContentUnits", Plain),
    ("patternTransform", Plain),
    ("patternUnits", Plain),
    ("phase", Plain),
    ("ping", SpaceSeparated),
    ("pitch", Plain),
    ("playbackOrder", Plain),
    ("points", Plain),
    ("pointsAtX", Number),
    ("pointsAtY", Number),
    ("pointsAtZ", Number),
    ("preserveAlpha", Plain),
    ("preserveAspectRatio", Plain),
    ("primitiveUnits", Plain),
    ("propagate", Plain),
    ("property", CommaOrSpaceSeparated),
    ("r", Plain),
    ("radius", Plain),
    ("refX", Plain),
    ("refY", Plain),
    ("rel", CommaOrSpaceSeparated),
    ("rev", CommaOrSpaceSeparated),
    ("repeatCount", Plain),
    ("repeatDur", Plain),
    ("requiredExtensions", CommaOrSpaceSeparated),
    ("requiredFeatures", CommaOrSpaceSeparated),
    ("requiredFonts", CommaOrSpaceSeparated),
    ("requiredFormats", CommaOrSpaceSeparated),
    ("resource", Plain),
    ("restart", Plain),
    ("result", Plain),
    ("rotate", Plain),
    ("rx", Plain),
    ("ry", Plain),
    ("scale", Plain),
    ("seed", Plain),
    ("side", Plain),
    ("slope", Plain),
    ("snapshotTime", Plain),
    ("specularConstant", Number),
    ("specularExponent", Number),
    ("spreadMethod", Plain),
    ("spacing", Plain),
    ("startOffset", Plain),
    ("stdDeviation", Plain),
    ("stemh", Plain),
    ("stemv", Plain),
    ("stitchTiles", Plain),
    ("string", Plain),
    ("stroke", Plain),
    ("style", Plain),
    ("surfaceScale", Number),
    ("syncBehavior", Plain),
    ("syncBehaviorDefault", Plain),
    ("syncMaster", Plain),
    ("syncTolerance", Plain),
    ("syncToleranceDefault", Plain),
    ("systemLanguage", CommaOrSpaceSeparated),
    ("tableValues", Plain),
    ("target", Plain),
    ("targetX", Number),
    ("targetY", Number),
    ("textLength", Plain),
    ("timelineBegin", Plain),
    ("title", Plain),
    ("transformBehavior", Plain),
    ("type", Plain),
    ("to", Plain),
    ("transform", Plain),
    ("u1", Plain),
    ("u2", Plain),
    ("unicode", Plain),
    ("values", Plain),
    ("version", Plain),
    ("viewBox", Plain),
    ("viewTarget", Plain),
    ("visibility", Plain),
    ("width", Plain),
    ("widths", Plain),
    ("x", Plain),
    ("x1", Plain),
    ("x2", Plain),
    ("xChannelSelector", Plain),
    ("y", Plain),
    ("y1", Plain),
    ("y2", Plain),
    ("yChannelSelector", Plain),
    ("z", Plain),
    ("zoomAndPan", Plain),
];

pub(super) fn definitions() -> Vec<Definition> {
    let renamed = RENAMED.iter().map(|(property, attribute, kind)| {
        Definition::new(property, attribute.to_string(), Space::Svg, *kind)
    });
    let verbatim = VERBATIM.iter().map(|(property, kind)| {
        Definition::new(property, property.to_string(), Space::Svg, *kind)
    });
    renamed.chain(verbatim).collect()
}
