use nutype::nutype;

/// One normalized word of a name or query.
///
/// Keywords are always lowercase and never empty, so a tokenizer can hand any
/// raw segment to [`Keyword::try_new`] and drop the ones that fail.
#[nutype(
    sanitize(lowercase),
    validate(not_empty),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        AsRef,
        Deref,
        TryFrom,
        Into,
        Hash,
        Display,
    )
)]
pub struct Keyword(String);
