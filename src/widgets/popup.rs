use ratatui::{Frame, layout::Rect, widgets::Clear};

pub fn centered_popup(frame_area: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(frame_area.width);
    let popup_height = height.min(frame_area.height);

    let popup_x = (frame_area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (frame_area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: popup_x,
        y: popup_y,
        width: popup_width,
        height: popup_height,
    }
}

pub fn popup_above_anchor(anchor: Rect, width: u16, height: u16) -> Rect {
    Rect {
        x: anchor.x,
        y: anchor.y.saturating_sub(height),
        width: width.min(anchor.width),
        height: height.min(anchor.y),
    }
}

/// Popup directly below the anchor, clipped to the frame.
pub fn popup_below_anchor(anchor: Rect, frame_area: Rect, width: u16, height: u16) -> Rect {
    let top = anchor.y.saturating_add(anchor.height);
    let available = frame_area.height.saturating_sub(top);

    Rect {
        x: anchor.x,
        y: top.min(frame_area.height),
        width: width.min(anchor.width),
        height: height.min(available),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: u16, y: u16, width: u16, height: u16) -> Rect {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    #[test]
    fn test_centered_popup_basic() {
        let popup = centered_popup(rect(0, 0, 100, 50), 40, 20);

        assert_eq!(popup.x, 30);
        assert_eq!(popup.y, 15);
        assert_eq!(popup.width, 40);
        assert_eq!(popup.height, 20);
    }

    #[test]
    fn test_centered_popup_too_large_is_clamped() {
        let popup = centered_popup(rect(0, 0, 100, 50), 200, 100);

        assert_eq!(popup.width, 100);
        assert_eq!(popup.height, 50);
        assert_eq!(popup.x, 0);
        assert_eq!(popup.y, 0);
    }

    #[test]
    fn test_popup_above_anchor_basic() {
        let popup = popup_above_anchor(rect(10, 30, 80, 3), 60, 10);

        assert_eq!(popup.x, 10);
        assert_eq!(popup.y, 20);
        assert_eq!(popup.width, 60);
        assert_eq!(popup.height, 10);
    }

    #[test]
    fn test_popup_above_anchor_no_overflow() {
        let popup = popup_above_anchor(rect(0, 5, 100, 3), 80, 10);

        assert_eq!(popup.y, 0);
        assert_eq!(popup.height, 5);
    }

    #[test]
    fn test_popup_below_anchor_basic() {
        let popup = popup_below_anchor(rect(10, 5, 40, 3), rect(0, 0, 100, 50), 40, 6);

        assert_eq!(popup.x, 10);
        assert_eq!(popup.y, 8);
        assert_eq!(popup.width, 40);
        assert_eq!(popup.height, 6);
    }

    #[test]
    fn test_popup_below_anchor_clipped_to_frame() {
        let popup = popup_below_anchor(rect(0, 45, 40, 3), rect(0, 0, 100, 50), 40, 10);

        assert_eq!(popup.y, 48);
        assert_eq!(popup.height, 2);
    }
}
