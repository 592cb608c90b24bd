use crate::bits::bit;
use crate::ecc::EccLevel;
use crate::mask::Mask;
use crate::version::Version;

/// The module grid under construction.
///
/// Two parallel grids are kept: the module colors, and a marker for cells
/// fixed by function patterns or format/version stamps. Masking exempts
/// marked cells. The function grid never leaves the builder; the finished
/// symbol takes only the module colors via [`Matrix::into_modules`].
#[derive(Debug, Clone)]
pub(crate) struct Matrix {
    size: i32,
    modules: Vec<bool>,
    func: Vec<bool>,
}

impl Matrix {
    // A grid of all-light, unmarked cells for the given version.
    pub(crate) fn new(version: Version) -> Self {
        let size = version.size();
        let cells = (size * size) as usize;
        Self {
            size,
            modules: vec![false; cells],
            func: vec![false; cells],
        }
    }

    pub(crate) fn size(&self) -> i32 {
        self.size
    }

    fn index(&self, x: i32, y: i32) -> usize {
        (y * self.size + x) as usize
    }

    // Module color at (x, y), which must be in bounds.
    pub(crate) fn module(&self, x: i32, y: i32) -> bool {
        self.modules[self.index(x, y)]
    }

    fn set(&mut self, x: i32, y: i32, dark: bool) {
        let i = self.index(x, y);
        self.modules[i] = dark;
    }

    fn is_function(&self, x: i32, y: i32) -> bool {
        self.func[self.index(x, y)]
    }

    // Writes the module and marks the cell as a function module.
    fn set_function(&mut self, x: i32, y: i32, dark: bool) {
        let i = self.index(x, y);
        self.modules[i] = dark;
        self.func[i] = true;
    }

    pub(crate) fn count_dark(&self) -> i32 {
        self.modules.iter().map(|&b| i32::from(b)).sum()
    }

    pub(crate) fn into_modules(self) -> Vec<bool> {
        self.modules
    }

    // Draws and marks every function module: timing, finders, alignment,
    // a placeholder format stamp (mask 0, overwritten after mask
    // selection), and the version information for versions 7 and up.
    pub(crate) fn draw_function_patterns(&mut self, version: Version, ecc: EccLevel) {
        let size = self.size;
        for i in 0..size {
            self.set_function(6, i, i % 2 == 0);
            self.set_function(i, 6, i % 2 == 0);
        }

        // The finders overwrite some timing modules.
        self.draw_finder_pattern(3, 3);
        self.draw_finder_pattern(size - 4, 3);
        self.draw_finder_pattern(3, size - 4);

        let positions = alignment_pattern_positions(version);
        let n = positions.len();
        for (i, &row) in positions.iter().enumerate() {
            for (j, &col) in positions.iter().enumerate() {
                // The three corners adjacent to finders stay clear.
                if i == 0 && j == 0 || i == 0 && j == n - 1 || i == n - 1 && j == 0 {
                    continue;
                }
                self.draw_alignment_pattern(col, row);
            }
        }

        self.draw_format_bits(ecc, Mask::new(0));
        self.draw_version_info(version);
    }

    // A 9x9 finder stamp (separator included) centered at (x, y). Cells
    // falling outside the grid are dropped.
    fn draw_finder_pattern(&mut self, x: i32, y: i32) {
        for dy in -4..=4 {
            for dx in -4..=4 {
                let (xx, yy) = (x + dx, y + dy);
                if (0..self.size).contains(&xx) && (0..self.size).contains(&yy) {
                    let dist = dx.abs().max(dy.abs());
                    self.set_function(xx, yy, dist != 2 && dist != 4);
                }
            }
        }
    }

    // A 5x5 alignment stamp centered at (x, y); always fully in bounds.
    fn draw_alignment_pattern(&mut self, x: i32, y: i32) {
        for dy in -2..=2 {
            for dx in -2..=2 {
                self.set_function(x + dx, y + dy, dx.abs().max(dy.abs()) != 1);
            }
        }
    }

    // Stamps both copies of the 15-bit format codeword for the given level
    // and mask, plus the always-dark module next to the lower-left finder.
    pub(crate) fn draw_format_bits(&mut self, ecc: EccLevel, mask: Mask) {
        let bits = format_info_bits(ecc, mask);

        // First copy, around the top-left finder.
        for i in 0..6 {
            self.set_function(8, i, bit(bits, i));
        }
        self.set_function(8, 7, bit(bits, 6));
        self.set_function(8, 8, bit(bits, 7));
        self.set_function(7, 8, bit(bits, 8));
        for i in 9..15 {
            self.set_function(14 - i, 8, bit(bits, i));
        }

        // Second copy, split between the other two finders.
        let size = self.size;
        for i in 0..8 {
            self.set_function(size - 1 - i, 8, bit(bits, i));
        }
        for i in 8..15 {
            self.set_function(8, size - 15 + i, bit(bits, i));
        }
        self.set_function(8, size - 8, true);
    }

    // Stamps both copies of the 18-bit version codeword, for version >= 7.
    fn draw_version_info(&mut self, version: Version) {
        if version.value() < 7 {
            return;
        }
        let bits = version_info_bits(version);
        for i in 0..18 {
            let dark = bit(bits, i);
            let long = self.size - 11 + i % 3;
            let short = i / 3;
            self.set_function(long, short, dark);
            self.set_function(short, long, dark);
        }
    }

    // Lays the codeword bits onto the grid in the standard zigzag: column
    // pairs right to left, alternating vertical direction, skipping
    // function modules. The timing column shifts the affected pair left.
    pub(crate) fn draw_codewords(&mut self, data: &[u8]) {
        let mut i = 0; // bit index into data
        let mut right = self.size - 1;
        while right >= 1 {
            if right == 6 {
                right = 5;
            }
            let upward = (right + 1) & 2 == 0;
            for vert in 0..self.size {
                for j in 0..2 {
                    let x = right - j;
                    let y = if upward { self.size - 1 - vert } else { vert };
                    if !self.is_function(x, y) && i < data.len() * 8 {
                        let dark = bit(u32::from(data[i >> 3]), 7 - ((i as i32) & 7));
                        self.set(x, y, dark);
                        i += 1;
                    }
                    // Remainder bits (0 to 7 cells) stay light.
                }
            }
            right -= 2;
        }
        debug_assert_eq!(i, data.len() * 8);
    }

    // XORs every non-function module selected by the mask predicate.
    // Self-inverse: applying the same mask twice restores the grid.
    pub(crate) fn apply_mask(&mut self, mask: Mask) {
        for y in 0..self.size {
            for x in 0..self.size {
                if mask.inverts(x, y) && !self.is_function(x, y) {
                    let i = self.index(x, y);
                    self.modules[i] ^= true;
                }
            }
        }
    }
}

// Ascending center positions of the alignment pattern grid for the given
// version, used on both axes. Version 1 has none; otherwise position 0 is
// always 6 and the rest walk down from size - 7 in even steps.
pub(crate) fn alignment_pattern_positions(version: Version) -> Vec<i32> {
    let ver = i32::from(version.value());
    if ver == 1 {
        return Vec::new();
    }
    let n = ver / 7 + 2;
    let step = (ver * 8 + n * 3 + 5) / (n * 4 - 4) * 2;
    let size = version.size();
    let mut result: Vec<i32> = (0..n - 1).map(|i| size - 7 - i * step).collect();
    result.push(6);
    result.reverse();
    result
}

// The 15-bit format codeword: 2 ECC bits and 3 mask bits, a 10-bit BCH
// remainder over generator 0x537, the whole XORed with 0x5412.
pub(crate) fn format_info_bits(ecc: EccLevel, mask: Mask) -> u32 {
    let data = u32::from(ecc.format_bits() << 3 | mask.value());
    let mut rem = data;
    for _ in 0..10 {
        rem = (rem << 1) ^ ((rem >> 9) * 0x537);
    }
    let bits = (data << 10 | rem) ^ 0x5412;
    debug_assert_eq!(bits >> 15, 0);
    bits
}

// The 18-bit version codeword: the 6-bit version number and a 12-bit BCH
// remainder over generator 0x1F25.
pub(crate) fn version_info_bits(version: Version) -> u32 {
    let data = u32::from(version.value());
    let mut rem = data;
    for _ in 0..12 {
        rem = (rem << 1) ^ ((rem >> 11) * 0x1F25);
    }
    let bits = data << 12 | rem;
    debug_assert_eq!(bits >> 18, 0);
    bits
}
