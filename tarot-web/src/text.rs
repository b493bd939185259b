//! Page copy. The page ships in a single locale (zh-TW).
use tarot_draw::StatusLine;

pub const SUBTITLE: &str = "抽一張牌，給今天一個溫柔的行動方向。";
pub const VIP_ON_LABEL: &str = "開啟 VIP（測試）";
pub const VIP_OFF_LABEL: &str = "關閉 VIP";
pub const PILE_HINT_IDLE: &str = "滑鼠移到牌上會浮起，點一張抽牌";
pub const PILE_HINT_DRAWING: &str = "抽牌中…";
pub const CARD_BACK_ALT: &str = "塔羅牌背";
pub const RESULT_HEADING: &str = "你抽到的是";
pub const ADVICE_HEADING: &str = "今日建議";
pub const DRAW_AGAIN: &str = "再次抽牌";
pub const FOOTER: &str = "Daily Tarot · Rust + Yew";

#[must_use]
pub fn title(max_daily: u32) -> String {
    format!("每日限抽 {max_daily} 張塔羅")
}

#[must_use]
pub fn status_line(line: StatusLine) -> String {
    match line {
        StatusLine::Vip => "VIP 模式：不限次數".to_string(),
        StatusLine::Locked => "今日已抽完".to_string(),
        StatusLine::Remaining(n) => format!("剩 {n} 次"),
    }
}

#[must_use]
pub const fn vip_toggle_label(vip: bool) -> &'static str {
    if vip { VIP_OFF_LABEL } else { VIP_ON_LABEL }
}

#[must_use]
pub const fn pile_hint(drawing: bool) -> &'static str {
    if drawing {
        PILE_HINT_DRAWING
    } else {
        PILE_HINT_IDLE
    }
}

/// Footer line under a result, e.g. `今天抽牌次數：2（剩 1 次）`.
#[must_use]
pub fn result_meta(count: u32, vip: bool, remaining: u32) -> String {
    if vip {
        format!("今天抽牌次數：{count}（VIP 不限次）")
    } else {
        format!("今天抽牌次數：{count}（剩 {remaining} 次）")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_lines_cover_each_variant() {
        assert_eq!(status_line(StatusLine::Remaining(2)), "剩 2 次");
        assert_eq!(status_line(StatusLine::Locked), "今日已抽完");
        assert!(status_line(StatusLine::Vip).starts_with("VIP"));
    }

    #[test]
    fn result_meta_marks_vip() {
        assert_eq!(result_meta(2, false, 1), "今天抽牌次數：2（剩 1 次）");
        assert!(result_meta(5, true, 0).contains("VIP"));
        assert_eq!(title(3), "每日限抽 3 張塔羅");
        assert_eq!(vip_toggle_label(true), VIP_OFF_LABEL);
        assert_eq!(pile_hint(true), PILE_HINT_DRAWING);
    }
}
