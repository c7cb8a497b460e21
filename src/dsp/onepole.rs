/*
One-Pole Low-Pass Filter
========================

The simplest useful filter: the output is a weighted running average of the
previous output and the current input.

    y[n] = c * y[n-1] + (1 - c) * x[n]

The coefficient `c` (0.0 to just under 1.0) sets how slowly the output tracks
the input:

    c = 0.0    output follows input exactly (no filtering)
    c = 0.5    gentle smoothing
    c = 0.99   heavy smoothing, only slow changes pass

The coefficient is passed per sample rather than stored, because both users
of this filter move it while running: the percussion renderer keeps it fixed
per drum, and the bass voice sweeps it from an LFO on every sample.

For any bounded input and c in [0, 1), the output stays within the input
bounds: each step is a convex combination of two in-range values.
*/

/// One-pole low-pass filter. Holds only its single sample of memory.
#[derive(Debug, Clone, Copy, Default)]
pub struct OnePole {
    z: f32,
}

impl OnePole {
    pub fn new() -> Self {
        Self { z: 0.0 }
    }

    /// Filter one sample with the given coefficient.
    #[inline]
    pub fn process(&mut self, input: f32, coeff: f32) -> f32 {
        self.z = coeff * self.z + (1.0 - coeff) * input;
        self.z
    }

    /// Current filter memory (the last output).
    pub fn state(&self) -> f32 {
        self.z
    }

    pub fn reset(&mut self) {
        self.z = 0.0;
    }
}
