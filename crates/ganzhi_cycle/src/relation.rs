//! Branch relations: clash (Chong) and six harmonies (Liu He).

use crate::branch::Branch;

/// The six harmonious branch pairs.
pub static LIU_HE_PAIRS: [(Branch, Branch); 6] = [
    (Branch::Zi, Branch::Chou),
    (Branch::Yin, Branch::Hai),
    (Branch::Mao, Branch::Xu),
    (Branch::Chen, Branch::You),
    (Branch::Si, Branch::Shen),
    (Branch::Wu, Branch::Wei),
];

/// Branch opposition: indices six apart in Z12. Symmetric.
pub const fn branches_clash(a: u8, b: u8) -> bool {
    (a % 12 + 12 - b % 12) % 12 == 6
}

/// Six-harmonies pairing: indices summing to 1 in Z12.
pub const fn branches_combine(a: u8, b: u8) -> bool {
    (a % 12 + b % 12) % 12 == 1
}
