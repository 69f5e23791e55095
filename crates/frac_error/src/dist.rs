// https://en.wikipedia.org/wiki/Damerau%E2%80%93Levenshtein_distance
fn edit_distance(a: &[u8], b: &[u8]) -> usize {
    if a.is_empty() {
        b.len()
    }

    else if b.is_empty() {
        a.len()
    }

    else {
        let i = a.len();
        let j = b.len();
        let mut cache = vec![vec![usize::MAX; j]; i];

        edit_distance_impl(a, b, i - 1, j - 1, &mut cache)
    }
}

// lowercase
// remove `-`s and `_`s
fn preprocess(s: &[u8]) -> Vec<u8> {
    // `cache` uses O(n * m) space
    let s = if s.len() > 64 { &s[..64] } else { s };

    s.iter().map(
        |c| c.to_ascii_lowercase()
    ).filter(
        |c| *c != b'-' && *c != b'_'
    ).collect()
}

/// It's used to find a similar flag name, so `--decmal` suggests `--decimal`.
/// If `sub` is much shorter than `s`, it's compared against substrings of `s`.
pub fn substr_edit_distance(sub: &[u8], s: &[u8]) -> usize {
    let sub = &preprocess(sub);
    let s = &preprocess(s);

    if sub == s {
        0
    }

    else if sub.len() > s.len() || s.len() < 4 {
        edit_distance(sub, s)
    }

    else if sub.len() * 2 > s.len() {
        let mut result = usize::MAX;

        for start in 0..s.len() {
            for end in (start + 1)..(s.len() + 1) {
                result = result.min(
                    edit_distance(sub, &s[start..end])
                );
            }
        }

        result
    }

    else {
        edit_distance(sub, s)
    }
}

// the distance between `a[..=i]` and `b[..=j]`
fn edit_distance_impl(a: &[u8], b: &[u8], i: usize, j: usize, cache: &mut Vec<Vec<usize>>) -> usize {
    if cache[i][j] != usize::MAX {
        return cache[i][j];
    }

    let indicator = (a[i] != b[j]) as usize;

    let result = if i == 0 && j == 0 {
        indicator
    }

    else if i == 0 {
        // `a[0]` matches one of `b[..=j]`, or none of them
        (edit_distance_impl(a, b, 0, j - 1, cache) + 1).min(j + indicator)
    }

    else if j == 0 {
        (edit_distance_impl(a, b, i - 1, 0, cache) + 1).min(i + indicator)
    }

    else {
        let mut result = (edit_distance_impl(a, b, i - 1, j, cache) + 1)
            .min(edit_distance_impl(a, b, i, j - 1, cache) + 1)
            .min(edit_distance_impl(a, b, i - 1, j - 1, cache) + indicator);

        if i > 1 && j > 1 && a[i] == b[j - 1] && a[i - 1] == b[j] {
            result = result.min(edit_distance_impl(a, b, i - 2, j - 2, cache) + 1);
        }

        result
    };

    cache[i][j] = result;
    result
}
