//! Sample contact lines.

#![allow(dead_code)]

/// Name fused, fields comma-separated, phone with spaces.
pub const FUSED_NAME_LINE: &str = "Ria Tillotson, aqua marine, 97671, 196 910 5548";

/// (last, first) order with a trailing zip and a parenthesized area code.
pub const LAST_FIRST_LINE: &str = "Tillotson, Ria, aqua marine, (196)9105548, 97671";

/// Four recognizable fields, no phone.
pub const MISSING_PHONE_LINE: &str = "Booker T., Washington, 87360, yellow";

/// Only a name and a single field.
pub const MALFORMED_LINE: &str = "Jamie Stevenson, yellow";

/// Mixed document: lines 3 and 5 fail.
pub const MIXED_DOCUMENT: &str = "\
Noah Moench, 123123121, 232 695 2394, yellow
Booker T., Washington, 87360, 373 781 7380, yellow
Chandler, Kerri, (623)-668-9293, pink, 123123121
James Murphy, yellow, 83880, 018 154 6474
asdfawefawea,awefawfawfwef,awefawefawfaw,afwefawfawfaw
Washington, Booker T., (373)-781-7380, yellow, 87360
";
