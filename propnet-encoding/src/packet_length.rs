pub mod packet {
    /// Every frame on the air is exactly this long.
    pub const PACKET_LEN: usize = 32;

    pub mod header {
        pub const DESTINATION_LEN: usize = 2;
        pub const SOURCE_LEN: usize = 2;
        pub const KIND_LEN: usize = 1;
        pub const TIMESTAMP_LEN: usize = 2;

        pub const HEADER_LEN: usize = DESTINATION_LEN + SOURCE_LEN + KIND_LEN + TIMESTAMP_LEN;

        pub const DESTINATION_OFFSET: usize = 0;
        pub const SOURCE_OFFSET: usize = DESTINATION_OFFSET + DESTINATION_LEN;
        pub const KIND_OFFSET: usize = SOURCE_OFFSET + SOURCE_LEN;
        pub const TIMESTAMP_OFFSET: usize = KIND_OFFSET + KIND_LEN;
    }

    pub mod payload {
        use super::header::HEADER_LEN;
        use super::PACKET_LEN;

        pub const SETTING_INDEX_LEN: usize = 1;
        pub const SETTING_U16_LEN: usize = 2;

        pub const PAYLOAD_MAX_LEN: usize = PACKET_LEN - HEADER_LEN;

        /// Eight u16 settings plus one trailing raw value is the densest
        /// packing the payload admits.
        pub const SETTINGS_MAX_COUNT: usize =
            (PAYLOAD_MAX_LEN - SETTING_INDEX_LEN) / (SETTING_INDEX_LEN + SETTING_U16_LEN) + 1;
    }
}
