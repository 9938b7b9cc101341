//! Hidden stems (cang gan) latent in each earthly branch.
//!
//! Every branch holds at least one stem; the first listed is the principal
//! stem and shares the branch's element.

use crate::branch::Branch;
use crate::stem::Stem::{self, Bing, Ding, Geng, Gui, Ji, Jia, Ren, Wu, Xin, Yi};

/// Hidden stems indexed by branch (0 = Zi).
const HIDDEN_STEMS: [&[Stem]; 12] = [
    &[Gui],            // 子
    &[Ji, Gui, Xin],   // 丑
    &[Jia, Bing, Wu],  // 寅
    &[Yi],             // 卯
    &[Wu, Yi, Gui],    // 辰
    &[Bing, Geng, Wu], // 巳
    &[Ding, Ji],       // 午
    &[Ji, Ding, Yi],   // 未
    &[Geng, Ren, Wu],  // 申
    &[Xin],            // 酉
    &[Wu, Xin, Ding],  // 戌
    &[Ren, Jia],       // 亥
];

/// Stems latent in a branch, principal stem first.
pub const fn hidden_stems(branch: Branch) -> &'static [Stem] {
    HIDDEN_STEMS[branch as usize]
}
