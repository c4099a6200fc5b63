//! Built-in sample programs

/// A named program shipped with the driver
#[derive(Debug, Clone, Copy)]
pub struct Sample {
    pub name: &'static str,
    pub source: &'static str,
}

pub const SAMPLES: [Sample; 5] = [
    Sample {
        name: "countdown",
        source: ">987v>.v\r\nv456<  :\r\n>321 ^ _@",
    },
    Sample {
        name: "factorial",
        source: "08>:1-:v v *_$.@ \r\n  ^    _$>\\:^  ^    _$>\\:^",
    },
    Sample {
        name: "hello",
        source: ">25*\"!dlroW olleH\":v\r\n                v:,_@\r\n                >  ^",
    },
    Sample {
        name: "quine",
        source: "01->1# +# :# 0# g# ,# :# 5# 8# *# 4# +# -# _@",
    },
    Sample {
        name: "sieve",
        source: "2>:3g\" \"-!v\\  g30          <\r\n |!`\"&\":+1_:.:03p>03g+:\"&\"`|\r\n @               ^  p3\\\" \":<\r\n2 2345678901234567890123456789012345678",
    },
];

/// Look up a sample by 1-based index or by name
pub fn find(key: &str) -> Option<&'static Sample> {
    if let Ok(index) = key.parse::<usize>() {
        return index.checked_sub(1).and_then(|i| SAMPLES.get(i));
    }
    SAMPLES.iter().find(|s| s.name == key)
}
