use crate::autotune::note::{Note, NOTES_PER_OCTAVE};
use crate::common::ScaledHz;

/// The number of octaves in [`NOTE_TABLE`].
pub const OCTAVES: usize = 9;

/// Equal tempered note frequencies in units of 1/10000 Hz, indexed by
/// `[octave][note]`, from C0 (16.35 Hz) to B8 (7902.13 Hz). A4 is 440 Hz.
pub const NOTE_TABLE: [[u32; NOTES_PER_OCTAVE]; OCTAVES] = [
    [163500, 173200, 183500, 194500, 206000, 218300, 231200, 245000, 259600, 275000, 291400, 308700],
    [327000, 346500, 367100, 388900, 412000, 436500, 462500, 490000, 519100, 550000, 582700, 617400],
    [654100, 693000, 734200, 777800, 824100, 873100, 925000, 980000, 1038300, 1100000, 1165400, 1234700],
    [1308100, 1385900, 1468300, 1555600, 1648100, 1746100, 1850000, 1960000, 2076500, 2200000, 2330800, 2469400],
    [2616300, 2771800, 2936600, 3111300, 3296300, 3492300, 3699900, 3920000, 4153000, 4400000, 4661600, 4938800],
    [5232500, 5543700, 5873300, 6222500, 6592500, 6984600, 7399900, 7839900, 8306100, 8800000, 9323300, 9877700],
    [10465000, 11087300, 11746600, 12445100, 13185100, 13969100, 14799800, 15679800, 16612200, 17600000, 18646600, 19755300],
    [20930000, 22174600, 23493200, 24890200, 26370200, 27938300, 29599600, 31359600, 33224400, 35200000, 37293100, 39510700],
    [41860100, 44349200, 46986300, 49780300, 52740400, 55876500, 59199100, 62719300, 66448800, 70400000, 74586200, 79021300],
];

/// The table frequency of `note` in `octave`, or `None` if the octave is
/// outside the table.
pub fn canonical_frequency(octave: usize, note: Note) -> Option<ScaledHz> {
    NOTE_TABLE
        .get(octave)
        .map(|row| row[note.index()] as ScaledHz)
}
