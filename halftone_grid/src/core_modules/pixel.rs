// THEORY:
// The `Pixel` module is the most fundamental unit of the transform. It is a
// "dumb" data container for one source pixel: three 8-bit channels, named by the
// colour they carry rather than by their position in some decoder's buffer.
//
// Decoders disagree on byte order. Some hand out blue-green-red, the `image`
// crate hands out red-green-blue. Naming the channels means the luminance
// weights below are bound to colours, so swapping decoders can never silently
// swap which hues count as bright. The constructors are the only place where a
// byte layout is interpreted.
//
// Luminance uses the ITU-R BT.709 luma coefficients on the 0..255 channel values.

pub mod pixel {
    pub type Channel = u8;
    pub type ComputedChannel = f64;
    pub type Luminance = f64;

    pub const RED_WEIGHT: f64 = 0.2126;
    pub const GREEN_WEIGHT: f64 = 0.7152;
    pub const BLUE_WEIGHT: f64 = 0.0722;

    /// A single source pixel. Field order follows the blue-green-red storage order.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Pixel {
        /// The blue channel value (0-255).
        pub blue: Channel,
        /// The green channel value (0-255).
        pub green: Channel,
        /// The red channel value (0-255).
        pub red: Channel,
    }

    impl Pixel {
        pub const BLACK: Pixel = Pixel { blue: 0, green: 0, red: 0 };
        pub const WHITE: Pixel = Pixel { blue: 255, green: 255, red: 255 };

        pub fn new(blue: Channel, green: Channel, red: Channel) -> Self {
            Self { blue, green, red }
        }

        pub fn from_bgr([blue, green, red]: [Channel; 3]) -> Self {
            Self { blue, green, red }
        }

        pub fn from_rgb([red, green, blue]: [Channel; 3]) -> Self {
            Self { blue, green, red }
        }

        pub fn gray(value: Channel) -> Self {
            Self { blue: value, green: value, red: value }
        }

        /// Perceived brightness on the 0..255 scale.
        pub fn luminance(&self) -> Luminance {
            luminance(
                self.blue as ComputedChannel,
                self.green as ComputedChannel,
                self.red as ComputedChannel,
            )
        }
    }

    /// BT.709 luma of already-averaged channel values, taken in storage order.
    #[inline]
    pub fn luminance(blue: ComputedChannel, green: ComputedChannel, red: ComputedChannel) -> Luminance {
        BLUE_WEIGHT * blue + GREEN_WEIGHT * green + RED_WEIGHT * red
    }

    impl From<image::Rgb<u8>> for Pixel {
        fn from(rgb: image::Rgb<u8>) -> Self {
            Pixel::from_rgb(rgb.0)
        }
    }

    impl From<Pixel> for [Channel; 3] {
        /// Bytes in blue-green-red order.
        fn from(pixel: Pixel) -> Self {
            [pixel.blue, pixel.green, pixel.red]
        }
    }
}
