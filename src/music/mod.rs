//! Conversions between frequencies, frequency ratios, semitones and MIDI note numbers, in twelve
//! tone equal temperament tuned to A4 = 440 Hz.

use num_traits::Float;

mod tests;

/// The MIDI note number of A4.
pub const A4_MIDI: f64 = 69.0;
/// The frequency of A4, in Hz.
pub const A4_HZ: f64 = 440.0;

fn lit<T: Float>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}

/// The number of semitones spanned by a frequency ratio, `12 log2(ratio)`.
pub fn ratio2semitones<T: Float>(ratio: T) -> T {
    lit::<T>(12.0) * ratio.log2()
}

/// The frequency ratio spanned by a number of semitones, `2^(semitones / 12)`.
pub fn semitones2ratio<T: Float>(semitones: T) -> T {
    lit::<T>(2.0).powf(semitones / lit(12.0))
}

/// Converts a frequency in Hz to a (fractional) MIDI note number.
///
/// # Examples
/// ```
/// # use meadow::music::hz2midi;
/// assert_eq!(hz2midi(440.0), 69.0);
/// assert_eq!(hz2midi(880.0), 81.0);
/// ```
pub fn hz2midi<T: Float>(hz: T) -> T {
    lit::<T>(A4_MIDI) + ratio2semitones(hz / lit(A4_HZ))
}

/// Converts a (fractional) MIDI note number to a frequency in Hz.
pub fn midi2hz<T: Float>(midi: T) -> T {
    lit::<T>(A4_HZ) * semitones2ratio(midi - lit(A4_MIDI))
}
