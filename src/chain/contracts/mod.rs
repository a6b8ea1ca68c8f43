use alloy::sol;

sol! {
    #[sol(rpc)]
    IERC1155MetadataURI,
    "src/chain/contracts/ABI/IERC1155MetadataURI.json"
}

sol! {
    #[sol(rpc)]
    IERC721Metadata,
    "src/chain/contracts/ABI/IERC721Metadata.json"
}
