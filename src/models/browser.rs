//! The fixed set of browsers shown in every embed.

use std::fmt;

/// A tracked browser, in display order.
///
/// The variant order is the column order of the rendered table, so the
/// derived `Ord` can be used to key ordered maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Browser {
    Ie,
    Edge,
    Firefox,
    Chrome,
    Safari,
    IosSafari,
    OperaMini,
    ChromeAndroid,
    Android,
    Samsung,
}

impl Browser {
    /// All tracked browsers in column order.
    pub const ALL: [Browser; 10] = [
        Browser::Ie,
        Browser::Edge,
        Browser::Firefox,
        Browser::Chrome,
        Browser::Safari,
        Browser::IosSafari,
        Browser::OperaMini,
        Browser::ChromeAndroid,
        Browser::Android,
        Browser::Samsung,
    ];

    /// Agent id used by the caniuse dataset (also the cell CSS class).
    pub fn caniuse_key(&self) -> &'static str {
        match self {
            Browser::Ie => "ie",
            Browser::Edge => "edge",
            Browser::Firefox => "firefox",
            Browser::Chrome => "chrome",
            Browser::Safari => "safari",
            Browser::IosSafari => "ios_saf",
            Browser::OperaMini => "op_mini",
            Browser::ChromeAndroid => "and_chr",
            Browser::Android => "android",
            Browser::Samsung => "samsung",
        }
    }

    /// Browser key used by MDN browser-compat-data.
    pub fn mdn_key(&self) -> &'static str {
        match self {
            Browser::IosSafari => "safari_ios",
            Browser::ChromeAndroid => "chrome_android",
            Browser::Samsung => "samsunginternet_android",
            other => other.caniuse_key(),
        }
    }

    /// Column heading.
    pub fn display_name(&self) -> &'static str {
        match self {
            Browser::Ie => "IE",
            Browser::Edge => "Edge",
            Browser::Firefox => "Firefox",
            Browser::Chrome => "Chrome",
            Browser::Safari => "Safari",
            Browser::IosSafari => "iOS Safari",
            Browser::OperaMini => "Opera Mini",
            Browser::ChromeAndroid => "Chrome for Android",
            Browser::Android => "Android Browser",
            Browser::Samsung => "Samsung Internet",
        }
    }
}

impl fmt::Display for Browser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.caniuse_key())
    }
}
