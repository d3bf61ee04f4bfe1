use super::{Definition, Kind, Space};

use Kind::{Boolean, CommaSeparated, Number, OverloadedBoolean, Plain, SpaceSeparated};

const ATTRIBUTES: &[(&str, &str)] = &[
    ("acceptcharset", "accept-charset"),
    ("classname", "class"),
    ("htmlfor", "for"),
    ("httpequiv", "http-equiv"),
];

const PROPERTIES: &[(&str, Kind)] = &[
    ("abbr", Plain),
    ("accept", CommaSeparated),
    ("acceptCharset", SpaceSeparated),
    ("accessKey", SpaceSeparated),
    ("action", Plain),
    ("allow", Plain),
    ("allowFullScreen", Boolean),
    ("allowPaymentRequest", Boolean),
    ("allowUserMedia", Boolean),
    ("alt", Plain),
    ("as", Plain),
    ("async", Boolean),
    ("autoCapitalize", Plain),
    ("autoComplete", SpaceSeparated),
    ("autoFocus", Boolean),
    ("autoPlay", Boolean),
    ("capture", Boolean),
    ("charSet", Plain),
    ("checked", Boolean),
    ("cite", Plain),
    ("className", SpaceSeparated),
    ("cols", Number),
    ("colSpan", Plain),
    ("content", Plain),
    ("contentEditable", Plain),
    ("controls", Boolean),
    ("controlsList", SpaceSeparated),
    ("coords", CommaSeparated),
    ("crossOrigin", Plain),
    ("data", Plain),
    ("dateTime", Plain),
    ("decoding", Plain),
    ("default", Boolean),
    ("defer", Boolean),
    ("dir", Plain),
    ("dirName", Plain),
    ("disabled", Boolean),
    ("download", OverloadedBoolean),
    ("draggable", Plain),
    ("encType", Plain),
    ("enterKeyHint", Plain),
    ("form", Plain),
    ("formAction", Plain),
    ("formEncType", Plain),
    ("formMethod", Plain),
    ("formNoValidate", Boolean),
    ("formTarget", Plain),
    ("headers", SpaceSeparated),
    ("height", Number),
    ("hidden", Boolean),
    ("high", Number),
    ("href", Plain),
    ("hrefLang", Plain),
    ("htmlFor", SpaceSeparated),
    ("httpEquiv", SpaceSeparated),
    ("id", Plain),
    ("imageSizes", Plain),
    ("imageSrcSet", Plain),
    ("inputMode", Plain),
    ("integrity", Plain),
    ("is", Plain),
    ("isMap", Boolean),
    ("itemId", Plain),
    ("itemProp", SpaceSeparated),
    ("itemRef", SpaceSeparated),
    ("itemScope", Boolean),
    ("itemType", SpaceSeparated),
    ("kind", Plain),
    ("label", Plain),
    ("lang", Plain),
    ("language", Plain),
    ("list", Plain),
    ("loading", Plain),
    ("loop", Boolean),
    ("low", Number),
    ("manifest", Plain),
    ("max", Plain),
    ("maxLength", Number),
    ("media", Plain),
    ("method", Plain),
    ("min", Plain),
    ("minLength", Number),
    ("multiple", Boolean),
    ("muted", Boolean),
    ("name", Plain),
    ("nonce", Plain),
    ("noModule", Boolean),
    ("noValidate", Boolean),
    ("open", Boolean),
    ("optimum", Number),
    ("pattern", Plain),
    ("ping", SpaceSeparated),
    ("placeholder", Plain),
    ("playsInline", Boolean),
    ("poster", Plain),
    ("preload", Plain),
    ("readOnly", Boolean),
    ("referrerPolicy", Plain),
    ("rel", SpaceSeparated),
    ("required", Boolean),
    ("reversed", Boolean),
    ("rows", Number),
    ("rowSpan", Number),
    ("sandbox", SpaceSeparated),
    ("scope", Plain),
    ("scoped", Boolean),
    ("seamless", Boolean),
    ("selected", Boolean),
    ("shape", Plain),
    ("size", Number),
    ("sizes", Plain),
    ("slot", Plain),
    ("span", Number),
    ("spellCheck", Plain),
    ("src", Plain),
    ("srcDoc", Plain),
    ("srcLang", Plain),
    ("srcSet", CommaSeparated),
    ("start", Number),
    ("step", Plain),
    ("style", Plain),
    ("tabIndex", Number),
    ("target", Plain),
    ("title", Plain),
    ("translate", Plain),
    ("type", Plain),
    ("typeMustMatch", Boolean),
    ("useMap", Plain),
    ("value", Plain),
    ("width", Number),
    ("wrap", Plain),
    // Legacy.
    ("align", Plain),
    ("aLink", Plain),
    ("archive", SpaceSeparated),
    ("axis", Plain),
    ("background", Plain),
    ("bgColor", Plain),
    ("border", Number),
    ("borderColor", Plain),
    ("bottomMargin", Number),
    ("cellPadding", Plain),
    ("cellSpacing", Plain),
    ("char", Plain),
    ("charOff", Plain),
    ("classId", Plain),
    ("clear", Plain),
    ("code", Plain),
    ("codeBase", Plain),
    ("codeType", Plain),
    ("color", Plain),
    ("compact", Boolean),
    ("declare", Boolean),
    ("event", Plain),
    ("face", Plain),
    ("frame", Plain),
    ("frameBorder", Plain),
    ("hSpace", Number),
    ("leftMargin", Number),
    ("link", Plain),
    ("longDesc", Plain),
    ("lowSrc", Plain),
    ("marginHeight", Number),
    ("marginWidth", Number),
    ("noResize", Boolean),
    ("noHref", Boolean),
    ("noShade", Boolean),
    ("noWrap", Boolean),
    ("object", Plain),
    ("profile", Plain),
    ("prompt", Plain),
    ("rev", Plain),
    ("rightMargin", Number),
    ("rules", Plain),
    ("scheme", Plain),
    ("scrolling", Plain),
    ("standby", Plain),
    ("summary", Plain),
    ("text", Plain),
    ("topMargin", Number),
    ("valueType", Plain),
    ("version", Plain),
    ("vAlign", Plain),
    ("vLink", Plain),
    ("vSpace", Number),
    // Non-standard.
    ("allowTransparency", Plain),
    ("autoCorrect", Plain),
    ("autoSave", Plain),
    ("disablePictureInPicture", Boolean),
    ("disableRemotePlayback", Boolean),
    ("prefix", Plain),
    ("property", Plain),
    ("results", Number),
    ("security", Plain),
    ("unselectable", Plain),
];

pub(super) fn definitions() -> Vec<Definition> {
    PROPERTIES
        .iter()
        .map(|(property, kind)| {
            let lower = property.to_lowercase();
            let attribute = ATTRIBUTES
                .iter()
                .find(|(from, _)| *from == lower)
                .map(|(_, to)| to.to_string())
                .unwrap_or(lower);
            Definition::new(property, attribute, Space::Html, *kind)
        })
        .collect()
}
