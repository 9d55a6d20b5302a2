//! Hebrew numerals (gematria) with geresh and gershayim.

const ONES: [char; 10] = ['\0', 'א', 'ב', 'ג', 'ד', 'ה', 'ו', 'ז', 'ח', 'ט'];
const TENS: [char; 10] = ['\0', 'י', 'כ', 'ל', 'מ', 'נ', 'ס', 'ע', 'פ', 'צ'];
const HUNDREDS: [char; 5] = ['\0', 'ק', 'ר', 'ש', 'ת'];

const GERESH: char = '׳';
const GERSHAYIM: char = '״';

/// Renders `n` as a Hebrew numeral, dropping the thousands.
///
/// A single letter is followed by a geresh (`ח׳`); longer numerals carry a
/// gershayim before the last letter (`תשפ״ה`). Fifteen and sixteen are
/// written `ט״ו` and `ט״ז`. Returns an empty string when `n % 1000 == 0`.
pub fn hebrew_numeral(n: u32) -> String {
    let mut rest = n % 1000;
    let mut letters: Vec<char> = Vec::new();

    let mut hundreds = rest / 100;
    while hundreds >= 4 {
        letters.push(HUNDREDS[4]);
        hundreds -= 4;
    }
    if hundreds > 0 {
        letters.push(HUNDREDS[hundreds as usize]);
    }
    rest %= 100;

    match rest {
        15 => letters.extend(['ט', 'ו']),
        16 => letters.extend(['ט', 'ז']),
        _ => {
            if rest >= 10 {
                letters.push(TENS[(rest / 10) as usize]);
            }
            if rest % 10 > 0 {
                letters.push(ONES[(rest % 10) as usize]);
            }
        }
    }

    match letters.len() {
        0 => String::new(),
        1 => format!("{}{GERESH}", letters[0]),
        len => {
            let mut out: String = letters[..len - 1].iter().collect();
            out.push(GERSHAYIM);
            out.push(letters[len - 1]);
            out
        }
    }
}
