use bitflags::bitflags;

bitflags! {
    /// Framebuffer planes reset by a clear. Combine with `|`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ClearMask: u32 {
        const COLOR = gl::COLOR_BUFFER_BIT;
        const DEPTH = gl::DEPTH_BUFFER_BIT;
        const STENCIL = gl::STENCIL_BUFFER_BIT;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_gl_values() {
        assert_eq!(ClearMask::COLOR.bits(), 0x4000);
        assert_eq!(ClearMask::DEPTH.bits(), 0x0100);
        assert_eq!(ClearMask::STENCIL.bits(), 0x0400);
    }

    #[test]
    fn union_keeps_both_planes() {
        let mask = ClearMask::COLOR | ClearMask::DEPTH;
        assert!(mask.contains(ClearMask::COLOR));
        assert!(mask.contains(ClearMask::DEPTH));
        assert!(!mask.contains(ClearMask::STENCIL));
        // Union is idempotent, unlike xor which would drop a repeated plane.
        assert_eq!(mask | ClearMask::DEPTH, mask);
        assert_ne!(mask ^ ClearMask::DEPTH, mask);
    }
}
