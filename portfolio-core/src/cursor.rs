//! Geometry for the custom cursor halo and click ripples.

use crate::constants::CURSOR_OFFSET;

/// Top-left corner of the halo centred on the pointer.
pub fn halo_origin(client_x: f64, client_y: f64) -> (f64, f64) {
    (client_x - CURSOR_OFFSET, client_y - CURSOR_OFFSET)
}

/// CSS custom properties read by the click animation.
pub fn halo_vars(client_x: f64, client_y: f64) -> [(&'static str, String); 2] {
    let (x, y) = halo_origin(client_x, client_y);
    [("--x", px(x)), ("--y", px(y))]
}

/// Idle-state transform placing the halo under the pointer.
pub fn halo_transform(client_x: f64, client_y: f64) -> String {
    let (x, y) = halo_origin(client_x, client_y);
    format!("translate({}, {})", px(x), px(y))
}

/// Only the primary button pokes.
pub fn is_primary(button: i16) -> bool {
    button == 0
}

pub fn px(v: f64) -> String {
    format!("{v}px")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn halo_is_centred_on_pointer() {
        assert_eq!(halo_origin(100.0, 50.0), (80.0, 30.0));
        assert_eq!(halo_transform(100.0, 50.0), "translate(80px, 30px)");
        let [(kx, vx), (ky, vy)] = halo_vars(20.0, 25.5);
        assert_eq!((kx, vx.as_str()), ("--x", "0px"));
        assert_eq!((ky, vy.as_str()), ("--y", "5.5px"));
    }

    #[test]
    fn only_left_button_is_primary() {
        assert!(is_primary(0));
        assert!(!is_primary(1));
        assert!(!is_primary(2));
    }
}
