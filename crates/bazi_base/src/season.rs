//! Month-branch seasonal bonus.
//!
//! The month branch sets the season; each element gains or loses between
//! -2 and +2 points depending on whether the season feeds or drains it.

use crate::branch::Branch;
use crate::element::Element;

/// Bonus per month branch (row, 0 = Zi) and element (column, Wood..Water).
const SEASON_BONUS: [[i8; 5]; 12] = [
    //  Wd  Fi  Ea  Me  Wa
    [0, -2, -1, 0, 2],  // 子
    [-1, 0, 1, 1, 0],   // 丑
    [2, 1, 0, -1, -2],  // 寅
    [2, 1, 0, -1, -2],  // 卯
    [1, 0, 1, 0, -1],   // 辰
    [0, 2, 1, -1, -2],  // 巳
    [0, 2, 1, -1, -2],  // 午
    [0, 1, 1, 0, -1],   // 未
    [-1, -1, 0, 2, 1],  // 申
    [-1, -1, 0, 2, 1],  // 酉
    [-1, 0, 1, 1, 0],   // 戌
    [1, -2, -1, 0, 2],  // 亥
];

/// Seasonal bonus of `element` when the month branch is `month_branch`.
pub const fn seasonal_bonus(month_branch: Branch, element: Element) -> i8 {
    SEASON_BONUS[month_branch as usize][element as usize]
}

/// Whole row of bonuses for a month branch, in element order.
pub const fn seasonal_row(month_branch: Branch) -> [i8; 5] {
    SEASON_BONUS[month_branch as usize]
}
