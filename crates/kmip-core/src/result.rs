//! Operation result codes returned to KMIP clients.

kmip_enumeration! {
    /// Result Status (KMIP §9.1.3.2.26).
    pub enum ResultStatus {
        /// Operation succeeded.
        Success = 0x00,
        /// Operation failed; see the accompanying reason.
        OperationFailed = 0x01,
        /// Operation is pending.
        OperationPending = 0x02,
        /// Operation was undone.
        OperationUndone = 0x03,
    }
}

kmip_enumeration! {
    /// Result Reason (KMIP §9.1.3.2.27).
    pub enum ResultReason {
        /// Item not found.
        ItemNotFound = 0x01,
        /// Response too large.
        ResponseTooLarge = 0x02,
        /// Authentication not successful.
        AuthenticationNotSuccessful = 0x03,
        /// Invalid message.
        InvalidMessage = 0x04,
        /// Operation not supported.
        OperationNotSupported = 0x05,
        /// Missing data.
        MissingData = 0x06,
        /// Invalid field.
        InvalidField = 0x07,
        /// Feature not supported.
        FeatureNotSupported = 0x08,
        /// Operation canceled by requester.
        OperationCanceledByRequester = 0x09,
        /// Cryptographic failure.
        CryptographicFailure = 0x0A,
        /// Illegal operation.
        IllegalOperation = 0x0B,
        /// Permission denied.
        PermissionDenied = 0x0C,
        /// Object archived.
        ObjectArchived = 0x0D,
        /// Index out of bounds.
        IndexOutOfBounds = 0x0E,
        /// Application namespace not supported.
        ApplicationNamespaceNotSupported = 0x0F,
        /// Key format type not supported.
        KeyFormatTypeNotSupported = 0x10,
        /// Key compression type not supported.
        KeyCompressionTypeNotSupported = 0x11,
        /// Encoding option error.
        EncodingOptionError = 0x12,
        /// Key value not present.
        KeyValueNotPresent = 0x13,
        /// Attestation required.
        AttestationRequired = 0x14,
        /// Attestation failed.
        AttestationFailed = 0x15,
        /// Sensitive.
        Sensitive = 0x16,
        /// Not extractable.
        NotExtractable = 0x17,
        /// Object already exists.
        ObjectAlreadyExists = 0x18,
        /// General failure.
        GeneralFailure = 0x100,
    }
}
