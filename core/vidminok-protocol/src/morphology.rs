use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use alloc::string::{String, ToString};
use bitflags::bitflags;
use core::fmt;
use core::str::FromStr;

/// The seven Ukrainian grammatical cases.
///
/// Cases cross the public API as short codes (`nomn`, `gent`, `datv`, `accs`,
/// `ablt`, `loct`, `voct`). Anything else is rejected with [`CaseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum Case {
    Nominative = 0,
    Genitive = 1,
    Dative = 2,
    Accusative = 3,
    Instrumental = 4,
    Locative = 5,
    Vocative = 6,
}

impl Case {
    pub const ALL: [Case; 7] = [
        Case::Nominative,
        Case::Genitive,
        Case::Dative,
        Case::Accusative,
        Case::Instrumental,
        Case::Locative,
        Case::Vocative,
    ];

    pub const fn code(self) -> &'static str {
        match self {
            Case::Nominative => "nomn",
            Case::Genitive => "gent",
            Case::Dative => "datv",
            Case::Accusative => "accs",
            Case::Instrumental => "ablt",
            Case::Locative => "loct",
            Case::Vocative => "voct",
        }
    }

    /// Ukrainian name of the case, as shown to console users.
    pub const fn label(self) -> &'static str {
        match self {
            Case::Nominative => "Називний",
            Case::Genitive => "Родовий",
            Case::Dative => "Давальний",
            Case::Accusative => "Знахідний",
            Case::Instrumental => "Орудний",
            Case::Locative => "Місцевий",
            Case::Vocative => "Кличний",
        }
    }

    pub const fn grammeme(self) -> Grammemes {
        match self {
            Case::Nominative => Grammemes::NOMN,
            Case::Genitive => Grammemes::GENT,
            Case::Dative => Grammemes::DATV,
            Case::Accusative => Grammemes::ACCS,
            Case::Instrumental => Grammemes::ABLT,
            Case::Locative => Grammemes::LOCT,
            Case::Vocative => Grammemes::VOCT,
        }
    }

    /// The single case carried by a grammeme set, if exactly one is present.
    pub fn from_grammemes(tags: Grammemes) -> Option<Case> {
        let mut found = Case::ALL.iter().copied().filter(|c| tags.contains(c.grammeme()));
        match (found.next(), found.next()) {
            (Some(case), None) => Some(case),
            _ => None,
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Case {
    type Err = CaseError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Case::ALL
            .iter()
            .copied()
            .find(|c| c.code() == code)
            .ok_or_else(|| CaseError::Unsupported(code.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseError {
    Unsupported(String),
}

impl fmt::Display for CaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseError::Unsupported(code) => {
                write!(f, "Unsupported case '{}'. Use one of: ", code)?;
                for (i, case) in Case::ALL.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    f.write_str(case.code())?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CaseError {}

/// Anything a validated entry point accepts as a target case.
pub trait IntoCase {
    fn into_case(self) -> Result<Case, CaseError>;
}

impl IntoCase for Case {
    fn into_case(self) -> Result<Case, CaseError> {
        Ok(self)
    }
}

impl IntoCase for &str {
    fn into_case(self) -> Result<Case, CaseError> {
        self.parse()
    }
}

impl IntoCase for &String {
    fn into_case(self) -> Result<Case, CaseError> {
        self.as_str().parse()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum Gender {
    Masculine = 0,
    Feminine = 1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum PartOfSpeech {
    Noun = 0,
    Adjective = 1,
    Verb = 2,
    Adverb = 3,
    Preposition = 4,
    Conjunction = 5,
    Pronoun = 6,
    Particle = 7,
    Numeral = 8,
}

bitflags! {
    /// A set of grammemes attached to a lexeme or to one of its forms.
    ///
    /// In JSON lexicons the set is written as flag names, e.g. `"NOUN | MASC"`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct Grammemes: u32 {
        // Part of speech (Bits 0-8)
        const NOUN = 1;
        const ADJF = 1 << 1;
        const VERB = 1 << 2;
        const ADVB = 1 << 3;
        const PREP = 1 << 4;
        const CONJ = 1 << 5;
        const NPRO = 1 << 6;
        const PRCL = 1 << 7;
        const NUMR = 1 << 8;

        // Case (Bits 9-15)
        const NOMN = 1 << 9;
        const GENT = 1 << 10;
        const DATV = 1 << 11;
        const ACCS = 1 << 12;
        const ABLT = 1 << 13;
        const LOCT = 1 << 14;
        const VOCT = 1 << 15;

        // Gender (Bits 16-18)
        const MASC = 1 << 16;
        const FEMN = 1 << 17;
        const NEUT = 1 << 18;

        // Number (Bits 19-20)
        const SING = 1 << 19;
        const PLUR = 1 << 20;

        // Proper-name markers (Bits 21-23)
        const NAME = 1 << 21;
        const SURN = 1 << 22;
        const PATR = 1 << 23;

        // Used in the singular only
        const SGTM = 1 << 24;
        // Animate
        const ANIM = 1 << 25;
    }
}

impl Grammemes {
    pub const GENDERS: Grammemes = Grammemes::MASC.union(Grammemes::FEMN).union(Grammemes::NEUT);

    pub const NUMBERS: Grammemes = Grammemes::SING.union(Grammemes::PLUR);

    pub fn part_of_speech(self) -> Option<PartOfSpeech> {
        const TABLE: [(Grammemes, PartOfSpeech); 9] = [
            (Grammemes::NOUN, PartOfSpeech::Noun),
            (Grammemes::ADJF, PartOfSpeech::Adjective),
            (Grammemes::VERB, PartOfSpeech::Verb),
            (Grammemes::ADVB, PartOfSpeech::Adverb),
            (Grammemes::PREP, PartOfSpeech::Preposition),
            (Grammemes::CONJ, PartOfSpeech::Conjunction),
            (Grammemes::NPRO, PartOfSpeech::Pronoun),
            (Grammemes::PRCL, PartOfSpeech::Particle),
            (Grammemes::NUMR, PartOfSpeech::Numeral),
        ];
        TABLE.iter().find(|(flag, _)| self.contains(*flag)).map(|(_, pos)| *pos)
    }
}

// rkyv support for Grammemes: archived as its raw bits
impl Archive for Grammemes {
    type Archived = u32;
    type Resolver = ();

    unsafe fn resolve(&self, _pos: usize, _resolver: Self::Resolver, out: *mut Self::Archived) {
        out.write(self.bits());
    }
}

impl<S: rkyv::Fallible + ?Sized> Serialize<S> for Grammemes {
    fn serialize(&self, _serializer: &mut S) -> Result<Self::Resolver, S::Error> {
        Ok(())
    }
}

impl<D: rkyv::Fallible + ?Sized> Deserialize<Grammemes, D> for u32 {
    fn deserialize(&self, _deserializer: &mut D) -> Result<Grammemes, D::Error> {
        // Unknown bits from a newer lexicon are dropped, not rejected
        Ok(Grammemes::from_bits_truncate(*self))
    }
}
