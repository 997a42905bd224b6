mod caller_identity;
