//! Known CSS properties used by the effect gallery.
//!
//! [`Property`] is a closed set of the properties the gallery's catalogs and
//! editors produce, plus [`Property::Other`] for anything a user types by
//! hand. Known properties convert through static tables so their CSS names
//! are exact; unknown ones fall back to the rules in [`crate::casing`].

use std::borrow::Cow;
use std::fmt;

use phf::phf_map;

use crate::casing::{to_camel_case, to_kebab_case};

macro_rules! properties {
    ($($variant:ident => $camel:tt, $css:tt;)*) => {
        /// A CSS property key in a [`StyleRecord`](crate::types::StyleRecord).
        #[derive(Clone, Debug, PartialEq, Eq, Hash)]
        pub enum Property {
            $(
                #[doc = concat!("`", $css, "`")]
                $variant,
            )*
            /// Any other property, stored under its camel-case key.
            Other(String),
        }

        static BY_CAMEL_NAME: phf::Map<&'static str, Property> = phf_map! {
            $($camel => Property::$variant,)*
        };

        static BY_CSS_NAME: phf::Map<&'static str, Property> = phf_map! {
            $($css => Property::$variant,)*
        };

        impl Property {
            /// The camel-case record key (e.g. `backgroundColor`).
            pub fn camel_name(&self) -> &str {
                match self {
                    $(Property::$variant => $camel,)*
                    Property::Other(name) => name.as_str(),
                }
            }

            /// The hyphenated CSS name (e.g. `background-color`).
            pub fn css_name(&self) -> Cow<'_, str> {
                match self {
                    $(Property::$variant => Cow::Borrowed($css),)*
                    Property::Other(name) => Cow::Owned(to_kebab_case(name)),
                }
            }
        }
    };
}

properties! {
    Background => "background", "background";
    BackgroundColor => "backgroundColor", "background-color";
    BackgroundImage => "backgroundImage", "background-image";
    BackgroundSize => "backgroundSize", "background-size";
    BackgroundPosition => "backgroundPosition", "background-position";
    BackgroundRepeat => "backgroundRepeat", "background-repeat";
    BackgroundClip => "backgroundClip", "background-clip";
    WebkitBackgroundClip => "WebkitBackgroundClip", "-webkit-background-clip";
    Border => "border", "border";
    BorderTop => "borderTop", "border-top";
    BorderRight => "borderRight", "border-right";
    BorderBottom => "borderBottom", "border-bottom";
    BorderLeft => "borderLeft", "border-left";
    BorderWidth => "borderWidth", "border-width";
    BorderStyle => "borderStyle", "border-style";
    BorderColor => "borderColor", "border-color";
    BorderRadius => "borderRadius", "border-radius";
    BorderImage => "borderImage", "border-image";
    BorderImageSlice => "borderImageSlice", "border-image-slice";
    BoxShadow => "boxShadow", "box-shadow";
    Color => "color", "color";
    TextShadow => "textShadow", "text-shadow";
    FontSize => "fontSize", "font-size";
    FontWeight => "fontWeight", "font-weight";
    FontFamily => "fontFamily", "font-family";
    LetterSpacing => "letterSpacing", "letter-spacing";
    TextTransform => "textTransform", "text-transform";
    WebkitTextFillColor => "WebkitTextFillColor", "-webkit-text-fill-color";
    WebkitTextStroke => "WebkitTextStroke", "-webkit-text-stroke";
    MaskImage => "maskImage", "mask-image";
    WebkitMaskImage => "WebkitMaskImage", "-webkit-mask-image";
    Outline => "outline", "outline";
    OutlineOffset => "outlineOffset", "outline-offset";
    Opacity => "opacity", "opacity";
    Filter => "filter", "filter";
    BackdropFilter => "backdropFilter", "backdrop-filter";
    Transform => "transform", "transform";
    Transition => "transition", "transition";
    Animation => "animation", "animation";
    Width => "width", "width";
    Height => "height", "height";
    Padding => "padding", "padding";
    Margin => "margin", "margin";
}

impl Property {
    /// Looks up a property by its camel-case record key.
    ///
    /// ```
    /// use hcss::types::Property;
    ///
    /// assert_eq!(Property::from_camel("boxShadow"), Property::BoxShadow);
    /// assert_eq!(
    ///     Property::from_camel("gridArea"),
    ///     Property::Other("gridArea".to_string())
    /// );
    /// ```
    pub fn from_camel(key: &str) -> Self {
        let key = key.trim();
        BY_CAMEL_NAME
            .get(key)
            .cloned()
            .unwrap_or_else(|| Property::Other(key.to_string()))
    }

    /// Looks up a property by its CSS name, converting unknown names to
    /// camel case.
    ///
    /// ```
    /// use hcss::types::Property;
    ///
    /// assert_eq!(Property::from_css_name("border-radius"), Property::BorderRadius);
    /// assert_eq!(
    ///     Property::from_css_name("grid-area"),
    ///     Property::Other("gridArea".to_string())
    /// );
    /// ```
    pub fn from_css_name(name: &str) -> Self {
        let name = name.trim();
        match BY_CSS_NAME.get(name) {
            Some(property) => property.clone(),
            None => Self::from_camel(&to_camel_case(name)),
        }
    }

    /// Folds an [`Property::Other`] onto the property with the same CSS name.
    ///
    /// Two properties are equal after normalizing iff they serialize to the
    /// same CSS name.
    ///
    /// ```
    /// use hcss::types::Property;
    ///
    /// assert_eq!(Property::Other("color".into()).normalized(), Property::Color);
    /// assert_eq!(
    ///     Property::Other("webkitMaskImage".into()).normalized(),
    ///     Property::WebkitMaskImage
    /// );
    /// assert_eq!(
    ///     Property::Other("gridArea".into()).normalized(),
    ///     Property::Other("gridArea".into())
    /// );
    /// ```
    pub fn normalized(self) -> Self {
        match self {
            Property::Other(name) => Self::from_css_name(&to_kebab_case(&name)),
            known => known,
        }
    }

    /// Returns `true` for the per-side border longhands.
    pub fn is_border_side(&self) -> bool {
        matches!(
            self,
            Property::BorderTop | Property::BorderRight | Property::BorderBottom | Property::BorderLeft
        )
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_names_agree_with_casing_rules() {
        for (camel, property) in BY_CAMEL_NAME.entries() {
            assert_eq!(to_kebab_case(camel), property.css_name(), "camel {camel}");
            assert_eq!(to_camel_case(&property.css_name()), *camel);
        }
    }

    #[test]
    fn other_uses_casing_rules() {
        let property = Property::from_css_name("scroll-margin-top");
        assert_eq!(property, Property::Other("scrollMarginTop".into()));
        assert_eq!(property.css_name(), "scroll-margin-top");
    }
}
