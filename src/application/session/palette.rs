// 参加者の色の割り当て

use rand::Rng;

use crate::domain::render::HexColor;

/// ランダムな色を1つ生成する
pub fn random_color<R: Rng>(rng: &mut R) -> HexColor {
    let color = HexColor::from_u32(rng.gen_range(0..0x00ff_ffff));
    crate::vlog!("[配色] {}", color);
    color
}

/// 参加者数ぶんの色
pub fn assign_colors<R: Rng>(rng: &mut R, count: usize) -> Vec<HexColor> {
    (0..count).map(|_| random_color(rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn assigns_one_color_per_participant() {
        let mut rng = StdRng::seed_from_u64(5);
        let colors = assign_colors(&mut rng, 6);
        assert_eq!(colors.len(), 6);
        assert!(colors.iter().all(|c| c.a == 0xff));
    }

    #[test]
    fn seeded_colors_are_reproducible() {
        let a = assign_colors(&mut StdRng::seed_from_u64(11), 4);
        let b = assign_colors(&mut StdRng::seed_from_u64(11), 4);
        assert_eq!(a, b);
    }
}
