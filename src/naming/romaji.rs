// src/naming/romaji.rs
//! Kana → Latin transliteration (modified Hepburn).
//!
//! Katakana is folded onto hiragana first, so a single table covers both.
//! Digraphs (`きょ`, `ふぁ`, `てぃ`, …) are tried before single kana.
//! `っ` doubles the next consonant (`tch` before `ch`), `ー` repeats the
//! previous vowel and `う` is always written out (`きょうこ` → `kyouko`).
//! Anything outside the table is passed through untouched.

pub fn to_romaji(token: &str) -> String {
    let chars: Vec<char> = token.chars().map(fold_katakana).collect();
    let mut out = String::with_capacity(token.len() * 2);
    let mut sokuon = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        match c {
            'っ' => {
                sokuon = true;
                i += 1;
                continue;
            }
            'ー' => {
                if let Some(v) = out.chars().last().filter(|v| is_vowel(*v)) {
                    out.push(v);
                }
                i += 1;
                continue;
            }
            _ => {}
        }

        let (syllable, used) = match chars.get(i + 1).and_then(|&n| digraph(c, n)) {
            Some(r) => (r, 2),
            None => match monograph(c) {
                Some(r) => (r, 1),
                None => {
                    out.push(c);
                    sokuon = false;
                    i += 1;
                    continue;
                }
            },
        };

        if sokuon {
            push_geminate(&mut out, syllable);
            sokuon = false;
        }
        out.push_str(syllable);
        i += used;
    }
    out
}

/// Katakana block shares the hiragana layout, 0x60 code points higher.
fn fold_katakana(c: char) -> char {
    match c {
        'ァ'..='ヶ' => char::from_u32(c as u32 - 0x60).unwrap_or(c),
        _ => c,
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'i' | 'u' | 'e' | 'o')
}

fn push_geminate(out: &mut String, syllable: &str) {
    if syllable.starts_with("ch") {
        out.push('t');
        return;
    }
    if let Some(first) = syllable.chars().next() {
        if first.is_ascii_alphabetic() && !is_vowel(first) && first != 'n' {
            out.push(first);
        }
    }
}

fn digraph(a: char, b: char) -> Option<&'static str> {
    let r = match (a, b) {
        ('き', 'ゃ') => "kya", ('き', 'ゅ') => "kyu", ('き', 'ょ') => "kyo",
        ('ぎ', 'ゃ') => "gya", ('ぎ', 'ゅ') => "gyu", ('ぎ', 'ょ') => "gyo",
        ('し', 'ゃ') => "sha", ('し', 'ゅ') => "shu", ('し', 'ょ') => "sho", ('し', 'ぇ') => "she",
        ('じ', 'ゃ') => "ja",  ('じ', 'ゅ') => "ju",  ('じ', 'ょ') => "jo",  ('じ', 'ぇ') => "je",
        ('ち', 'ゃ') => "cha", ('ち', 'ゅ') => "chu", ('ち', 'ょ') => "cho", ('ち', 'ぇ') => "che",
        ('ぢ', 'ゃ') => "ja",  ('ぢ', 'ゅ') => "ju",  ('ぢ', 'ょ') => "jo",
        ('に', 'ゃ') => "nya", ('に', 'ゅ') => "nyu", ('に', 'ょ') => "nyo",
        ('ひ', 'ゃ') => "hya", ('ひ', 'ゅ') => "hyu", ('ひ', 'ょ') => "hyo",
        ('び', 'ゃ') => "bya", ('び', 'ゅ') => "byu", ('び', 'ょ') => "byo",
        ('ぴ', 'ゃ') => "pya", ('ぴ', 'ゅ') => "pyu", ('ぴ', 'ょ') => "pyo",
        ('み', 'ゃ') => "mya", ('み', 'ゅ') => "myu", ('み', 'ょ') => "myo",
        ('り', 'ゃ') => "rya", ('り', 'ゅ') => "ryu", ('り', 'ょ') => "ryo",

        // loanword spellings
        ('ふ', 'ぁ') => "fa", ('ふ', 'ぃ') => "fi", ('ふ', 'ぇ') => "fe", ('ふ', 'ぉ') => "fo",
        ('ふ', 'ゅ') => "fyu",
        ('て', 'ぃ') => "ti", ('で', 'ぃ') => "di",
        ('と', 'ぅ') => "tu", ('ど', 'ぅ') => "du",
        ('う', 'ぃ') => "wi", ('う', 'ぇ') => "we", ('う', 'ぉ') => "wo",
        ('ゔ', 'ぁ') => "va", ('ゔ', 'ぃ') => "vi", ('ゔ', 'ぇ') => "ve", ('ゔ', 'ぉ') => "vo",
        ('つ', 'ぁ') => "tsa", ('つ', 'ぃ') => "tsi", ('つ', 'ぇ') => "tse", ('つ', 'ぉ') => "tso",
        ('い', 'ぇ') => "ye",
        _ => return None,
    };
    Some(r)
}

fn monograph(c: char) -> Option<&'static str> {
    let r = match c {
        'あ' => "a",  'い' => "i",   'う' => "u",   'え' => "e",  'お' => "o",
        'か' => "ka", 'き' => "ki",  'く' => "ku",  'け' => "ke", 'こ' => "ko",
        'が' => "ga", 'ぎ' => "gi",  'ぐ' => "gu",  'げ' => "ge", 'ご' => "go",
        'さ' => "sa", 'し' => "shi", 'す' => "su",  'せ' => "se", 'そ' => "so",
        'ざ' => "za", 'じ' => "ji",  'ず' => "zu",  'ぜ' => "ze", 'ぞ' => "zo",
        'た' => "ta", 'ち' => "chi", 'つ' => "tsu", 'て' => "te", 'と' => "to",
        'だ' => "da", 'ぢ' => "ji",  'づ' => "zu",  'で' => "de", 'ど' => "do",
        'な' => "na", 'に' => "ni",  'ぬ' => "nu",  'ね' => "ne", 'の' => "no",
        'は' => "ha", 'ひ' => "hi",  'ふ' => "fu",  'へ' => "he", 'ほ' => "ho",
        'ば' => "ba", 'び' => "bi",  'ぶ' => "bu",  'べ' => "be", 'ぼ' => "bo",
        'ぱ' => "pa", 'ぴ' => "pi",  'ぷ' => "pu",  'ぺ' => "pe", 'ぽ' => "po",
        'ま' => "ma", 'み' => "mi",  'む' => "mu",  'め' => "me", 'も' => "mo",
        'や' => "ya",                'ゆ' => "yu",                'よ' => "yo",
        'ら' => "ra", 'り' => "ri",  'る' => "ru",  'れ' => "re", 'ろ' => "ro",
        'わ' => "wa", 'ゐ' => "i",                  'ゑ' => "e",  'を' => "o",
        'ん' => "n",
        'ゔ' => "vu",
        'ぁ' => "a",  'ぃ' => "i",   'ぅ' => "u",   'ぇ' => "e",  'ぉ' => "o",
        'ゃ' => "ya", 'ゅ' => "yu",  'ょ' => "yo",  'ゎ' => "wa",
        _ => return None,
    };
    Some(r)
}
