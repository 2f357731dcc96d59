//! The static stroke-sample table served by `fetch`.

/// One entry of the sample table: a stroke name and the CDN file it maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    /// Logical stroke name; becomes the local file name.
    pub name: &'static str,
    /// File name under the CDN base URL.
    pub remote_name: &'static str,
}

impl Sample {
    /// Local artifact name: `<name>.<ext>`, extension taken from the remote
    /// file name (fallback `ogg`).
    pub fn artifact_name(&self) -> String {
        let ext = match self.remote_name.rsplit_once('.') {
            Some((_, ext)) if !ext.is_empty() => ext,
            _ => "ogg",
        };
        format!("{}.{}", self.name, ext)
    }
}

/// The ten tabla strokes and their freesound preview files, in download order.
pub const STROKE_SAMPLES: [Sample; 10] = [
    Sample { name: "Dha", remote_name: "56144_693224-lq.ogg" },
    Sample { name: "Dhin", remote_name: "56145_693224-lq.ogg" },
    Sample { name: "Ge", remote_name: "56146_693224-lq.ogg" },
    Sample { name: "Ke", remote_name: "56147_693224-lq.ogg" },
    Sample { name: "Na", remote_name: "56148_693224-lq.ogg" },
    Sample { name: "Re", remote_name: "56149_693224-lq.ogg" },
    Sample { name: "Ta", remote_name: "56150_693224-lq.ogg" },
    Sample { name: "Te", remote_name: "56151_693224-lq.ogg" },
    Sample { name: "Tin", remote_name: "56152_693224-lq.ogg" },
    Sample { name: "Tun", remote_name: "56153_693224-lq.ogg" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_all_ten_strokes() {
        assert_eq!(STROKE_SAMPLES.len(), 10);
        assert_eq!(STROKE_SAMPLES[0].name, "Dha");
        assert_eq!(STROKE_SAMPLES[9].name, "Tun");
    }

    #[test]
    fn artifact_name_takes_extension_from_remote() {
        let sample = Sample { name: "Dha", remote_name: "56144_693224-lq.ogg" };
        assert_eq!(sample.artifact_name(), "Dha.ogg");

        let no_ext = Sample { name: "Dha", remote_name: "56144" };
        assert_eq!(no_ext.artifact_name(), "Dha.ogg");
    }
}
