/// Width in bytes of each framing offset for a container body of `size`
/// bytes that carries `entries` offsets. The offsets themselves count toward
/// the body, so the width is the smallest one whose range covers both.
pub fn framing_word_size(size: usize, entries: usize) -> usize {
    let size = size as u64;
    let entries = entries as u64;

    if size.saturating_add(entries) <= 0xFF {
        1
    } else if size.saturating_add(entries.saturating_mul(2)) <= 0xFFFF {
        2
    } else if size.saturating_add(entries.saturating_mul(4)) <= 0xFFFF_FFFF {
        4
    } else {
        8
    }
}
