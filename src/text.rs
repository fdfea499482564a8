//! Small string helpers used when formatting addresses.

/// Left pad `text` with `ch` up to `width` characters.
///
/// # Examples
/// ```
/// use ipv4_subnet_calc::text::pad;
/// assert_eq!(pad("101", 8, '0'), "00000101");
/// ```
pub fn pad(text: &str, width: usize, ch: char) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let mut padded: String = std::iter::repeat(ch).take(width - len).collect();
    padded.push_str(text);
    padded
}

/// Right pad `text` with `ch` up to `width` characters.
pub fn pad_right(text: &str, width: usize, ch: char) -> String {
    let len = text.chars().count();
    let mut padded = text.to_string();
    padded.extend(std::iter::repeat(ch).take(width.saturating_sub(len)));
    padded
}

/// Split `text` into chunks of `len` characters starting from the left.
///
/// The last chunk holds whatever is left over.
pub fn chunk_string(text: &str, len: usize) -> Vec<String> {
    if len == 0 {
        return vec![text.to_string()];
    }
    let chars: Vec<char> = text.chars().collect();
    chars.chunks(len).map(|c| c.iter().collect()).collect()
}

/// Split `text` into chunks of `len` characters starting from the right.
///
/// The first chunk holds whatever is left over.
pub fn chunk_right_string(text: &str, len: usize) -> Vec<String> {
    if len == 0 {
        return vec![text.to_string()];
    }
    let chars: Vec<char> = text.chars().collect();
    let mut chunks: Vec<String> = chars
        .rchunks(len)
        .map(|c| c.iter().collect())
        .collect();
    chunks.reverse();
    chunks
}

/// Binary representation of `value`, left padded with zeros to `digits`.
pub fn binary(value: u64, digits: usize) -> String {
    pad(&format!("{value:b}"), digits, '0')
}

/// Shift out the right most zero bits, `0b1111_1000` becomes `0b1_1111`.
pub fn remove_trailing_zeros(num: u32) -> u32 {
    if num == 0 {
        num
    } else {
        num >> num.trailing_zeros()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad() {
        assert_eq!(pad("7", 3, '0'), "007");
        assert_eq!(pad("1234", 3, '0'), "1234");
        assert_eq!(pad("", 2, ' '), "  ");
    }

    #[test]
    fn test_pad_right() {
        assert_eq!(pad_right("111", 8, '0'), "11100000");
        assert_eq!(pad_right("11111111", 4, '0'), "11111111");
    }

    #[test]
    fn test_chunk_string() {
        assert_eq!(chunk_string("aabbc", 2), vec!["aa", "bb", "c"]);
        assert_eq!(chunk_string("", 2), Vec::<String>::new());
        assert_eq!(chunk_string("abc", 0), vec!["abc"]);
    }

    #[test]
    fn test_chunk_right_string() {
        assert_eq!(chunk_right_string("abbcc", 2), vec!["a", "bb", "cc"]);
        assert_eq!(chunk_right_string("1234567", 3), vec!["1", "234", "567"]);
    }

    #[test]
    fn test_binary() {
        assert_eq!(binary(5, 8), "00000101");
        assert_eq!(binary(255, 4), "11111111");
        assert_eq!(binary(0, 1), "0");
    }

    #[test]
    fn test_remove_trailing_zeros() {
        assert_eq!(remove_trailing_zeros(248), 31);
        assert_eq!(remove_trailing_zeros(0), 0);
        assert_eq!(remove_trailing_zeros(7), 7);
    }
}
